use std::io::{self, Write};

use clap::{Parser, Subcommand};
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

use nexus_core::{catalog, NexusError, Portal, PortalConfig};

#[derive(Parser)]
#[command(name = "nexus", version, about = "Pet grooming client portal")]
struct Cli {
    /// Path to the portal database file
    #[arg(long, default_value = "nexus.db")]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the service menu and the bookable slots
    Services,
    /// Reserve a service at a date and time
    Book {
        /// Service name from the menu
        service: String,
        /// Date, e.g. "Jan 5"
        #[arg(long)]
        date: String,
        /// Time slot, e.g. "12:00"
        #[arg(long)]
        time: String,
    },
    /// Show the booking history
    Vault,
    /// Move a booking to a new slot
    Reschedule {
        id: i64,
        date: String,
        time: String,
    },
    /// Cancel a booking
    Cancel { id: i64 },
    /// Show the pet roster
    Family,
    /// Add a pet to the roster
    AddPet {
        name: String,
        #[arg(long, default_value = "")]
        breed: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Edit a pet's profile (omitted fields keep their current value)
    EditPet {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        breed: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove a pet from the roster
    RemovePet { id: i64 },
    /// Show the portal branding configuration
    Info,
    /// Delete all stored portal data
    Reset {
        /// Skip confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> nexus_core::Result<()> {
    let config = PortalConfig::from_env();
    let mut portal = Portal::open(&cli.db, config)?;

    match cli.command {
        Commands::Services => cmd_services(&portal),
        Commands::Book { service, date, time } => cmd_book(&mut portal, &service, &date, &time),
        Commands::Vault => cmd_vault(&portal),
        Commands::Reschedule { id, date, time } => cmd_reschedule(&mut portal, id, &date, &time),
        Commands::Cancel { id } => cmd_cancel(&mut portal, id),
        Commands::Family => cmd_family(&portal),
        Commands::AddPet { name, breed, notes } => cmd_add_pet(&mut portal, &name, &breed, &notes),
        Commands::EditPet { id, name, breed, notes } => {
            cmd_edit_pet(&mut portal, id, name, breed, notes)
        }
        Commands::RemovePet { id } => cmd_remove_pet(&mut portal, id),
        Commands::Info => cmd_info(&portal),
        Commands::Reset { yes } => cmd_reset(&mut portal, yes),
    }
}

fn cmd_services(portal: &Portal) -> nexus_core::Result<()> {
    let config = portal.config();
    println!("{} — {}", config.business_name, config.city);
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Service", "Price"]);
    for service in catalog::SERVICES.iter() {
        table.add_row(vec![service.name.clone(), service.price.clone()]);
    }
    println!("{table}");

    println!("Dates: {}", catalog::available_dates().join(", "));
    println!("Times: {}", catalog::TIME_SLOTS.join(", "));
    Ok(())
}

fn cmd_book(portal: &mut Portal, service: &str, date: &str, time: &str) -> nexus_core::Result<()> {
    let offering = catalog::find_service(service).ok_or_else(|| {
        NexusError::Data(format!(
            "Unknown service '{}'. Run 'nexus services' to see the menu.",
            service
        ))
    })?;

    match portal.book(&offering.name, &offering.price, date, time)? {
        Some(booking) => {
            println!("Booking Confirmed");
            println!("  {} ({}) on {} at {}", booking.service, booking.price, booking.date, booking.time);
            println!("  Reference: {}", booking.id);
        }
        None => println!("Nothing booked: a date and a time are required."),
    }
    Ok(())
}

fn cmd_vault(portal: &Portal) -> nexus_core::Result<()> {
    let bookings = portal.bookings();
    if bookings.is_empty() {
        println!("The vault is empty. Run 'nexus book <service>' to reserve a slot.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Id", "Service", "Price", "Date", "Time"]);
    for b in bookings {
        table.add_row(vec![
            b.id.to_string(),
            b.service.clone(),
            b.price.clone(),
            b.date.clone(),
            b.time.clone(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn cmd_reschedule(portal: &mut Portal, id: i64, date: &str, time: &str) -> nexus_core::Result<()> {
    match portal.reschedule(id, date, time)? {
        Some(booking) => {
            println!("Schedule Updated");
            println!("  {} on {} at {}", booking.service, booking.date, booking.time);
        }
        None => println!("Nothing updated: unknown booking, or missing date/time."),
    }
    Ok(())
}

fn cmd_cancel(portal: &mut Portal, id: i64) -> nexus_core::Result<()> {
    if portal.cancel(id)? {
        println!("Booking {} cancelled.", id);
    } else {
        println!("No booking with id {}.", id);
    }
    Ok(())
}

fn cmd_family(portal: &Portal) -> nexus_core::Result<()> {
    let pets = portal.pets();
    if pets.is_empty() {
        println!("No pets in the family yet. Run 'nexus add-pet <name>'.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Id", "Name", "Breed", "Notes"]);
    for p in pets {
        table.add_row(vec![p.id.to_string(), p.name.clone(), p.breed.clone(), p.notes.clone()]);
    }
    println!("{table}");
    Ok(())
}

fn cmd_add_pet(portal: &mut Portal, name: &str, breed: &str, notes: &str) -> nexus_core::Result<()> {
    match portal.add_pet(name, breed, notes)? {
        Some(pet) => println!("{} joined the family (id {}).", pet.name, pet.id),
        None => println!("Nothing added: a name is required."),
    }
    Ok(())
}

fn cmd_edit_pet(
    portal: &mut Portal,
    id: i64,
    name: Option<String>,
    breed: Option<String>,
    notes: Option<String>,
) -> nexus_core::Result<()> {
    let Some(current) = portal.pet(id).cloned() else {
        println!("No pet with id {}.", id);
        return Ok(());
    };

    let name = name.unwrap_or(current.name);
    let breed = breed.unwrap_or(current.breed);
    let notes = notes.unwrap_or(current.notes);

    match portal.update_pet(id, &name, &breed, &notes)? {
        Some(pet) => println!("{}'s profile updated.", pet.name),
        None => println!("Nothing updated: a name is required."),
    }
    Ok(())
}

fn cmd_remove_pet(portal: &mut Portal, id: i64) -> nexus_core::Result<()> {
    if portal.remove_pet(id)? {
        println!("Pet {} removed from the family.", id);
    } else {
        println!("No pet with id {}.", id);
    }
    Ok(())
}

fn cmd_info(portal: &Portal) -> nexus_core::Result<()> {
    let config = portal.config();
    println!("Business:    {}", config.business_name);
    println!("City:        {}", config.city);
    println!("Theme color: {}", config.theme_color);
    Ok(())
}

fn cmd_reset(portal: &mut Portal, yes: bool) -> nexus_core::Result<()> {
    if !yes {
        eprint!("This will delete every booking and pet. Continue? [y/N] ");
        let _ = io::stderr().flush();
        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| NexusError::Data(format!("Failed to read input: {}", e)))?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    portal.reset()?;
    println!("Portal data has been reset.");
    Ok(())
}
