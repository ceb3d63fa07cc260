mod api;
mod calculator;
mod dashboard;
mod date_range;
mod equipment;
mod locations;
mod report;

use clap::{Parser, Subcommand};

use crate::{
    cli::{
        calculator::CalculatorArgs,
        dashboard::DashboardArgs,
        equipment::EquipmentEnergyArgs,
        locations::LocationsArgs,
        report::ReportArgs,
    },
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Location dashboard: summary statistics, the average day, and the equipment distribution.
    Dashboard(Box<DashboardArgs>),

    /// Energy report: equipment overview, cooling load analysis, and recommendations.
    Report(Box<ReportArgs>),

    /// List the organisation's locations.
    Locations(Box<LocationsArgs>),

    /// Average day of a single piece of equipment.
    EquipmentEnergy(Box<EquipmentEnergyArgs>),

    /// Electricity consumption calculator.
    Calculator(Box<CalculatorArgs>),
}

impl Command {
    pub async fn run(self) -> Result {
        match self {
            Self::Dashboard(args) => args.run().await,
            Self::Report(args) => args.run().await,
            Self::Locations(args) => args.run().await,
            Self::EquipmentEnergy(args) => args.run().await,
            Self::Calculator(args) => args.run(),
        }
    }
}
