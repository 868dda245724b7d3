use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

// Import from your library
use coordkit::commands::{CommandFactory, CoordkitCommandFactory};
use coordkit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("CoordKit")
        .version("1.0")
        .author("Maurice Schilpp")
        .about("Describe coordinate reference systems and convert point batches between them")
        .arg(
            Arg::new("from")
                .long("from")
                .help("Source CRS description (e.g. 'ENU -77.5 38.9 100', 'GDC', 'UTM 31N')")
                .value_name("CRS")
                .required(false),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Target CRS description")
                .value_name("CRS")
                .required(false),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("Input file with one 'x y z' point per line")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file for converted points (defaults to stdout)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("describe")
                .short('d')
                .long("describe")
                .help("Describe a CRS string and exit")
                .value_name("CRS")
                .required(false),
        )
        .arg(
            Arg::new("zone")
                .short('z')
                .long("zone")
                .help("Print the UTM system for a geodetic 'lon,lat' point and exit")
                .value_name("LON,LAT")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_file = "coordkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("coordkit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = CoordkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
