//! Pack Catalog Config

use clap::Args;

/// Pack catalog settings.
///
/// The sizes are validated through [`baler::PackCatalog`] at startup and
/// remain fixed for the process lifetime.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Comma-separated pack sizes
    #[arg(
        long,
        env = "PACK_SIZES",
        value_delimiter = ',',
        default_value = "250,500,1000,2000,5000"
    )]
    pub pack_sizes: Vec<u64>,
}
