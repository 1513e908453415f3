use clap::Args;
use std::io;
use std::sync::Arc;
use waitlist_admin::config::{AppConfig, WaitlistConfig};
use waitlist_admin::error::AppError;
use waitlist_admin::waitlist::{
    write_csv, FilterCriteria, Notifier, RecordId, RecordStore, SortColumn, WaitlistPage,
    WaitlistView,
};

/// Sidebar controls as command-line flags.
#[derive(Args, Debug, Default)]
pub(crate) struct FilterArgs {
    /// Postcode substring (case-insensitive)
    #[arg(long)]
    pub(crate) postcode: Option<String>,
    /// Only onboarded signups
    #[arg(long)]
    pub(crate) onboarded: bool,
    /// Only rejected signups
    #[arg(long)]
    pub(crate) rejected: bool,
    /// Earliest signup date (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long)]
    pub(crate) start_date: Option<String>,
    /// Latest signup date (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long)]
    pub(crate) end_date: Option<String>,
    /// Only independent vendors
    #[arg(long)]
    pub(crate) independent: bool,
    /// Only company vendors
    #[arg(long)]
    pub(crate) company: bool,
    /// Only housekeeping offerings
    #[arg(long)]
    pub(crate) housekeeping: bool,
    /// Only window cleaning offerings
    #[arg(long)]
    pub(crate) window_cleaning: bool,
    /// Only car valet offerings
    #[arg(long)]
    pub(crate) car_valet: bool,
    /// Free-text search across every column
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Column to sort by (email, phone, postcode, vendor_type, service_offering, signup_date, status)
    #[arg(long, value_parser = parse_sort_column)]
    pub(crate) sort: Option<SortColumn>,
    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub(crate) descending: bool,
}

impl FilterArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            postcode: self.postcode.clone().unwrap_or_default(),
            onboarded: self.onboarded,
            rejected: self.rejected,
            start_date: self.start_date.clone().unwrap_or_default(),
            end_date: self.end_date.clone().unwrap_or_default(),
            independent: self.independent,
            company: self.company,
            housekeeping: self.housekeeping,
            window_cleaning: self.window_cleaning,
            car_valet: self.car_valet,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    #[command(flatten)]
    pub(crate) filters: FilterArgs,
    /// Page to render (clamped to the available pages)
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,
    /// Show the detail view for one record id after the table
    #[arg(long)]
    pub(crate) detail: Option<u32>,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub(crate) filters: FilterArgs,
}

/// Prints toasts inline since a terminal session has nothing to auto-dismiss.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("[notice] {message}");
    }
}

/// Silent for CSV output so stdout stays machine-readable.
struct QuietNotifier;

impl Notifier for QuietNotifier {
    fn notify(&self, _message: &str) {}
}

fn parse_sort_column(raw: &str) -> Result<SortColumn, String> {
    SortColumn::parse(raw).ok_or_else(|| format!("unknown sort column '{raw}'"))
}

fn prepared_view<N: Notifier>(
    config: &WaitlistConfig,
    notifier: N,
    filters: &FilterArgs,
) -> WaitlistView<N> {
    let store = Arc::new(RecordStore::generate(config.sample_size));
    let mut view = WaitlistView::new(store, Arc::new(notifier), config.page_size);

    let criteria = filters.criteria();
    if !criteria.is_unconstrained() {
        view.set_draft(criteria);
        view.apply_filters();
    }
    if let Some(query) = &filters.search {
        view.set_search(query.as_str());
    }
    if let Some(column) = filters.sort {
        view.sort_by(column);
        if filters.descending {
            view.sort_by(column);
        }
    }
    view
}

pub(crate) fn run_show(args: ShowArgs) -> Result<(), AppError> {
    let ShowArgs {
        filters,
        page,
        detail,
    } = args;

    let config = AppConfig::load()?;
    let mut view = prepared_view(&config.waitlist, ConsoleNotifier, &filters);
    view.go_to_page(page);
    render_page(&view.visible_page());

    if let Some(id) = detail {
        let detail = view.open_detail(RecordId(id))?;
        println!("\nRecord {}", detail.id);
        println!("- Email: {}", detail.contact.email);
        println!("- Phone: {}", detail.contact.phone);
        println!("- Postcode: {}", detail.contact.postcode);
        println!("- Signed up: {}", detail.signup_date_label);
        println!("- Vendor type: {}", detail.vendor_type_label);
        println!("- Services: {}", detail.services.join(", "));
        println!("- Status: {}", detail.status_label);
    }

    Ok(())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let view = prepared_view(&config.waitlist, QuietNotifier, &args.filters);
    let stdout = io::stdout();
    write_csv(&view.matching_records(), stdout.lock())?;
    Ok(())
}

fn render_page(page: &WaitlistPage) {
    println!("Waitlist");
    if let Some(column) = page.sort.column {
        println!("Sorted by {} ({:?})", column.label(), page.sort.direction);
    }

    if page.rows.is_empty() {
        println!("\nNo signups match the current filters");
    } else {
        println!();
        for row in &page.rows {
            println!(
                "- #{} | {} | {} | {} | {} | {} | {} | {}",
                row.id,
                row.email,
                row.phone,
                row.postcode,
                row.vendor_type_label,
                row.service_offering_label,
                row.signup_date_label,
                row.status_label
            );
        }
    }

    let window: Vec<String> = page
        .page_window
        .iter()
        .map(|number| {
            if *number == page.page {
                format!("[{number}]")
            } else {
                number.to_string()
            }
        })
        .collect();
    println!(
        "\nPage {} of {} ({} total results)  {}",
        page.page,
        page.total_pages,
        page.total,
        window.join(" ")
    );
}
