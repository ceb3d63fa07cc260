use std::{fs::File, io::BufWriter, path::PathBuf};

use chrono::Local;
use clap::{Parser, Subcommand};

use crate::{
    calculator::{
        ViewMode,
        breakdown::Breakdown,
        device::Category,
        export::write_csv,
        load_curve::load_curves,
        state::{Calculator, DeviceParams},
        storage::{DeviceStore, FileStorage},
    },
    prelude::*,
    quantity::{power::Watts, time::Hours},
    tables::{
        build_breakdown_table,
        build_category_table,
        build_devices_table,
        build_load_curve_table,
    },
};

#[derive(Parser)]
pub struct CalculatorArgs {
    /// Directory to keep the device list in.
    #[clap(long = "storage-dir", env = "CALCULATOR_STORAGE_DIR", default_value = ".benkon")]
    storage_dir: PathBuf,

    #[command(subcommand)]
    command: CalculatorCommand,
}

impl CalculatorArgs {
    pub fn run(self) -> Result {
        let store = DeviceStore::new(FileStorage::new(self.storage_dir));
        match self.command {
            CalculatorCommand::List { view_mode } => {
                let calculator = store.load()?;
                print_overview(&calculator, view_mode);
            }
            CalculatorCommand::Add(device) => {
                let calculator = store.load()?.with_device(device.into())?;
                store.save(&calculator)?;
                print_overview(&calculator, ViewMode::default());
            }
            CalculatorCommand::Edit { index, device } => {
                let calculator = store.load()?.with_replaced_device(index, device.into())?;
                store.save(&calculator)?;
                print_overview(&calculator, ViewMode::default());
            }
            CalculatorCommand::Remove { index } => {
                let calculator = store.load()?.without_device(index)?;
                store.save(&calculator)?;
                print_overview(&calculator, ViewMode::default());
            }
            CalculatorCommand::Reset => {
                let calculator = store.reset()?;
                info!(n_devices = calculator.devices().len(), "restored the defaults");
                print_overview(&calculator, ViewMode::default());
            }
            CalculatorCommand::Export { output } => {
                let output = output.unwrap_or_else(|| {
                    PathBuf::from(format!(
                        "electricity-consumption-{}.csv",
                        Local::now().date_naive()
                    ))
                });
                let file = File::create(&output)
                    .with_context(|| format!("failed to create `{}`", output.display()))?;
                write_csv(&store.load()?, BufWriter::new(file))?;
                info!(path = %output.display(), "saved");
            }
            CalculatorCommand::Curve { view_mode } => {
                let curves = load_curves(store.load()?.devices(), view_mode);
                println!("{}", build_load_curve_table(&curves));
            }
        }
        Ok(())
    }
}

fn print_overview(calculator: &Calculator, view_mode: ViewMode) {
    println!("{}", build_devices_table(calculator));
    println!("{}", build_category_table(calculator));
    println!("{}", build_breakdown_table(&Breakdown::new(calculator, view_mode)));
}

#[derive(Subcommand)]
enum CalculatorCommand {
    /// Show the devices and their consumption.
    List {
        #[clap(long, value_enum, default_value_t)]
        view_mode: ViewMode,
    },

    /// Add a device.
    Add(DeviceArgs),

    /// Replace the device at the index.
    Edit {
        index: usize,

        #[clap(flatten)]
        device: DeviceArgs,
    },

    /// Remove the device at the index.
    Remove { index: usize },

    /// Restore the default device list.
    Reset,

    /// Export the devices as CSV.
    Export {
        /// Output file, defaults to `electricity-consumption-<today>.csv`.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },

    /// Show the synthetic daily load curve.
    Curve {
        #[clap(long, value_enum, default_value_t)]
        view_mode: ViewMode,
    },
}

#[derive(Parser)]
struct DeviceArgs {
    #[clap(long)]
    name: String,

    #[clap(long, value_enum)]
    category: Category,

    /// Rated power in watts.
    #[clap(long = "power-watts")]
    power: Watts,

    #[clap(long)]
    hours_per_day: Hours,

    #[clap(long, default_value = "7")]
    days_per_week: u8,
}

impl From<DeviceArgs> for DeviceParams {
    fn from(args: DeviceArgs) -> Self {
        Self::builder()
            .name(args.name)
            .category(args.category)
            .power(args.power)
            .hours_per_day(args.hours_per_day)
            .days_per_week(args.days_per_week)
            .build()
    }
}
