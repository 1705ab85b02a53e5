//! `clinic-report`: load a clinic file and print a report.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use clinic_core::report::{patient_details, room_info, staff_listing, SeatingChart, StaffFilter};
use clinic_core::{Clinic, PatientId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportKind {
    SeatingChart,
    Json,
    Staff,
    ClinicalStaff,
    NonClinicalStaff,
    Room,
    Patient,
}

#[derive(Parser, Debug)]
#[command(name = "clinic-report", version, about = "Print reports for a clinic file")]
struct Args {
    /// Path to the clinic file
    #[arg(env = "CLINIC_FILE")]
    file: String,

    /// Report to print
    #[arg(long, short, value_enum, env = "CLINIC_REPORT", default_value = "seating-chart")]
    report: ReportKind,

    /// Room number for `--report room`
    #[arg(long)]
    room: Option<u32>,

    /// Patient ID for `--report patient`
    #[arg(long)]
    patient: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let clinic = Clinic::load_from_path(&args.file)
        .with_context(|| format!("Failed to load clinic file {}", args.file))?;

    print!("{}", render(&clinic, &args)?);
    Ok(())
}

fn render(clinic: &Clinic, args: &Args) -> Result<String> {
    let text = match args.report {
        ReportKind::SeatingChart => SeatingChart::from_clinic(clinic).render(),
        ReportKind::Json => {
            let mut json = SeatingChart::from_clinic(clinic)
                .to_json()
                .context("Failed to serialize seating chart")?;
            json.push('\n');
            json
        }
        ReportKind::Staff => staff_listing(clinic, StaffFilter::All),
        ReportKind::ClinicalStaff => staff_listing(clinic, StaffFilter::Clinical),
        ReportKind::NonClinicalStaff => staff_listing(clinic, StaffFilter::NonClinical),
        ReportKind::Room => {
            let Some(room) = args.room else {
                bail!("--room is required for the room report");
            };
            room_info(clinic, room)?
        }
        ReportKind::Patient => {
            let Some(patient) = args.patient else {
                bail!("--patient is required for the patient report");
            };
            patient_details(clinic, PatientId(patient))?
        }
    };
    Ok(text)
}
