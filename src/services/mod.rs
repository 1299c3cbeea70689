pub mod config_seeder;

pub use config_seeder::{
    ConfigSeeder, DiscoveryOutcome, SeedEntry, SeedOptions, SeedReport, SeedStatus,
    SeedStatusKind,
};
