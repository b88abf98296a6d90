use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use hc_client::models::{Booth, Center, Constituency, Holiday, Slot, SlotType};
use hc_console::{
    AdminEntity, AdminPage, AppointmentDraft, ConsoleConfig, ConsoleError, PageSize, SaveOutcome, Tab,
    render,
};

#[derive(Parser)]
#[command(version, about = "Health-card appointment admin console")]
struct Cli {
    /// Backend API root
    #[arg(long, env = "HC_API_BASE_URL")]
    api_url: Option<String>,

    /// Request timeout in seconds (none by default)
    #[arg(long, env = "HC_REQUEST_TIMEOUT_SECS")]
    timeout: Option<u64>,

    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show one page of records
    List {
        entity: EntityArg,
        #[command(flatten)]
        paging: PagingArgs,
    },
    /// Show the form, its selector choices and current values
    Fields {
        entity: EntityArg,
        /// Pre-fill a field, e.g. --set boothId=3 to see its centers
        #[arg(long = "set", value_parser = parse_assignment)]
        values: Vec<(String, String)>,
    },
    /// Create a record
    Add {
        entity: EntityArg,
        #[arg(long = "set", value_parser = parse_assignment, required = true)]
        values: Vec<(String, String)>,
    },
    /// Edit a record; unset fields keep their current values
    Update {
        entity: EntityArg,
        id: i64,
        #[arg(long = "set", value_parser = parse_assignment, required = true)]
        values: Vec<(String, String)>,
    },
    Delete {
        entity: EntityArg,
        id: i64,
    },
    /// Bulk constituency import from an Excel workbook
    Import { path: PathBuf },
    /// Family bookings, filtered
    Bookings {
        #[arg(long)]
        constituency: Option<String>,
        #[arg(long)]
        part: Option<i64>,
        #[arg(long)]
        center: Option<String>,
        /// Show full detail for one booking
        #[arg(long)]
        expand: Option<i64>,
    },
    /// Build an appointment request locally; nothing is sent to the backend
    Appointment(AppointmentArgs),
}

#[derive(Args)]
struct AppointmentArgs {
    #[arg(long)]
    voter: String,
    #[arg(long)]
    center: String,
    #[arg(long)]
    slot: String,
    /// YYYY-MM-DD
    #[arg(long)]
    date: String,
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    age: String,
    #[arg(long, default_value = "")]
    gender: String,
    #[arg(long, default_value = "")]
    constituency: String,
    #[arg(long, default_value = "")]
    booth: String,
    #[arg(long, default_value = "")]
    karyakarta: String,
    #[arg(long, default_value = "")]
    karyakarta_contact: String,
    #[arg(long)]
    family_head: bool,
    #[arg(long, default_value = "")]
    family_head_name: String,
    #[arg(long, default_value = "")]
    family_id: String,
    #[arg(long)]
    minor: bool,
}

impl From<AppointmentArgs> for AppointmentDraft {
    fn from(args: AppointmentArgs) -> Self {
        Self {
            voter_identifier: args.voter,
            hch_name: args.name,
            age: args.age,
            gender: args.gender,
            constituency_id: args.constituency,
            booth_id: args.booth,
            center_id: args.center,
            slot_id: args.slot,
            appointment_date: args.date,
            karyakarta_name: args.karyakarta,
            karyakarta_contact_number: args.karyakarta_contact,
            is_family_head: args.family_head,
            family_head_name: args.family_head_name,
            family_id: args.family_id,
            is_minor: args.minor,
        }
    }
}

#[derive(Args)]
struct PagingArgs {
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// 10, 25, 50 or 100
    #[arg(long, default_value_t = 10, value_parser = parse_page_size)]
    page_size: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum EntityArg {
    Constituency,
    Booth,
    Center,
    SlotType,
    Slot,
    Holiday,
}

enum Action {
    List(PagingArgs),
    Fields(Vec<(String, String)>),
    Add(Vec<(String, String)>),
    Update(i64, Vec<(String, String)>),
    Delete(i64),
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .ok_or_else(|| format!("expected field=value, got `{raw}`"))
}

fn parse_page_size(raw: &str) -> Result<usize, String> {
    let size: usize = raw.parse().map_err(|_| format!("`{raw}` is not a number"))?;
    PageSize::try_from(size)
        .map(|s| s.get())
        .map_err(|_| "page size must be 10, 25, 50 or 100".to_string())
}

async fn run_entity<E: AdminEntity>(page: &mut AdminPage, action: Action) -> Result<(), ConsoleError> {
    page.load::<E>().await?;
    match action {
        Action::List(paging) => {
            let total = E::collection(page.master()).len();
            let pager = page.tab_mut::<E>().pager_mut();
            if let Ok(size) = PageSize::try_from(paging.page_size) {
                pager.set_page_size(size);
            }
            pager.go_to(paging.page, total);
        }
        Action::Fields(values) => {
            for (field, value) in &values {
                page.set::<E>(field, value)?;
            }
            print!("{}", render::form(page.tab::<E>(), page.master()));
            return Ok(());
        }
        Action::Add(values) => {
            for (field, value) in &values {
                page.set::<E>(field, value)?;
            }
            report::<E>(page.save::<E>().await?);
        }
        Action::Update(id, values) => {
            page.edit::<E>(id)?;
            for (field, value) in &values {
                page.set::<E>(field, value)?;
            }
            report::<E>(page.save::<E>().await?);
        }
        Action::Delete(id) => {
            page.delete::<E>(id).await?;
            println!("Deleted {} {}", E::LABEL, id);
        }
    }
    print!("{}", render::tab_page(page.tab::<E>(), page.master()));
    Ok(())
}

fn report<E: AdminEntity>(outcome: SaveOutcome) {
    match outcome {
        SaveOutcome::Created(id) => println!("Created {} {}", E::LABEL, id),
        SaveOutcome::Updated(id) => println!("Updated {} {}", E::LABEL, id),
    }
}

async fn dispatch(page: &mut AdminPage, entity: EntityArg, action: Action) -> Result<(), ConsoleError> {
    match entity {
        EntityArg::Constituency => run_entity::<Constituency>(page, action).await,
        EntityArg::Booth => run_entity::<Booth>(page, action).await,
        EntityArg::Center => run_entity::<Center>(page, action).await,
        EntityArg::SlotType => run_entity::<SlotType>(page, action).await,
        EntityArg::Slot => run_entity::<Slot>(page, action).await,
        EntityArg::Holiday => run_entity::<Holiday>(page, action).await,
    }
}

fn show_bookings(page: &mut AdminPage, expand: Option<i64>) {
    if let Some(id) = expand {
        page.bookings_mut().toggle(id);
    }
    let viewer = page.bookings();
    let visible = page.visible_bookings();
    for booking in &visible {
        println!("{}", render::booking_header(booking));
        if viewer.is_expanded(booking.family_booking_id) {
            println!("{}", render::booking_detail(booking));
        }
    }
    println!("{}", viewer.summary(page.master().bookings.as_slice()));
    if visible.is_empty() && !page.master().bookings.is_empty() {
        print!("{}", render::filter_options(&page.booking_filter_options()));
    }
}

async fn run(page: &mut AdminPage, command: Command) -> Result<(), ConsoleError> {
    match command {
        Command::List { entity, paging } => dispatch(page, entity, Action::List(paging)).await,
        Command::Fields { entity, values } => dispatch(page, entity, Action::Fields(values)).await,
        Command::Add { entity, values } => dispatch(page, entity, Action::Add(values)).await,
        Command::Update { entity, id, values } => {
            dispatch(page, entity, Action::Update(id, values)).await
        }
        Command::Delete { entity, id } => dispatch(page, entity, Action::Delete(id)).await,
        Command::Import { path } => {
            let outcome = page.import(&path).await?;
            println!(
                "{}",
                outcome.message.as_deref().unwrap_or("Upload successful")
            );
            Ok(())
        }
        Command::Bookings {
            constituency,
            part,
            center,
            expand,
        } => {
            let filter = &mut page.bookings_mut().filter;
            filter.constituency = constituency;
            filter.part_number = part;
            filter.center = center;
            page.select_tab(Tab::FamilyBooking).await?;
            show_bookings(page, expand);
            Ok(())
        }
        Command::Appointment(args) => {
            page.mount().await;
            let id = page.create_local_appointment(&args.into())?;
            if let Some(record) = page
                .local_appointments()
                .rows()
                .iter()
                .find(|r| r.appointment_request_id == id)
            {
                print!("{}", render::appointment(record));
            }
            eprintln!("Appointment requests are not saved; this record ends with the session.");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut config = ConsoleConfig::from_env();
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    if let Some(secs) = cli.timeout {
        config.request_timeout_secs = Some(secs);
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    hc_console::logger::init_logger(&config.log_level, config.log_json, config.log_dir.as_deref());
    tracing::debug!(api = %config.api_base_url, timeout = ?config.request_timeout_secs, "Starting");

    let api = config.client_config().build()?;
    let mut page = AdminPage::new(api);

    match run(&mut page, cli.command).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{}", e.alert());
            Ok(ExitCode::FAILURE)
        }
    }
}
