//! Writes the generated `DataManager` source into the project in the
//! working directory.
//!
//! Log verbosity follows `RUST_LOG` and defaults to `info`.

use mcdata_codegen::{CodegenError, Generator};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CodegenError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let project_dir = std::env::current_dir()?;
    let generator = Generator::default();

    match generator.write_to(&project_dir) {
        Ok(path) => {
            tracing::info!(path = %path.display(), "done");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "generation failed");
            Err(e)
        }
    }
}
