//! propkit demo command
//!
//! Walks each of the three entities through a short scenario and prints the
//! resulting state. Handy as a smoke check and as living documentation of
//! the APIs.

use std::path::PathBuf;

use clap::Args;
use console::style;
use domain::{AccessGate, BoundedVehicle, CapacityContainer};
use shared::GateConfig;

#[derive(Debug, Args)]
pub struct DemoCommand {
    /// Gate configuration file (JSON with an "accessCode" field)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl DemoCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let gate_config = match &self.config {
            Some(path) => GateConfig::from_file(path)?,
            None => GateConfig::default(),
        };

        self.demo_container()?;
        self.demo_gate(&gate_config)?;
        self.demo_vehicle()?;
        Ok(())
    }

    fn demo_container(&self) -> anyhow::Result<()> {
        println!("{}", style("Capacity container").bold().underlined());

        let mut backpack = CapacityContainer::new(40.0, 15.0)?;
        backpack.add_item("book", 2.0, 1.0)?;
        backpack.add_item("water bottle", 1.0, 0.5)?;

        let (volume, weight) = backpack.current_load();
        println!(
            "Packed {} item(s): {volume} volume, {weight} weight",
            backpack.list_items().len()
        );

        // An item the container cannot take
        if let Err(err) = backpack.add_item("anvil", 1.0, 50.0) {
            println!("Rejected the anvil: {err}");
        }

        backpack.remove_item("book")?;
        let (volume, weight) = backpack.current_load();
        println!("After unpacking the book: {volume} volume, {weight} weight\n");
        Ok(())
    }

    fn demo_gate(&self, config: &GateConfig) -> anyhow::Result<()> {
        println!("{}", style("Access gate").bold().underlined());

        let mut intercom = AccessGate::new(101, config.access_code.clone())?;
        println!(
            "Gate for apartment {} starts locked: {}",
            intercom.apartment(),
            intercom.is_locked()
        );

        println!("Wrong code accepted: {}", intercom.unlock("0000"));
        println!("Right code accepted: {}", intercom.unlock(&config.access_code));
        intercom.lock();
        println!("Locked again: {}\n", intercom.is_locked());
        Ok(())
    }

    fn demo_vehicle(&self) -> anyhow::Result<()> {
        println!("{}", style("Bounded vehicle").bold().underlined());

        let mut airplane = BoundedVehicle::new(900.0, 12000.0, 5000.0)?;
        airplane.set_speed(800.0)?;
        airplane.climb(10000.0)?;
        airplane.fly(1000.0)?;

        if let Err(err) = airplane.fly(4500.0) {
            println!("Leg refused: {err}");
        }

        println!("Status: {}", serde_json::to_string(&airplane.status())?);
        Ok(())
    }
}
