use member_migration::{run_migration, MigrationConfig};

fn main() {
    // Fixed paths, no flags. Both outcomes print one line and exit normally.
    let config = MigrationConfig::default();

    match run_migration(&config) {
        Ok(report) => println!("Successfully processed {} members.", report.accepted),
        Err(e) => println!("Error: {:#}", e),
    }
}
