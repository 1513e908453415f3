mod common;
mod filtering;
mod sorting;
