use std::fmt;

use fauxdict_types::SourceOrigin;

use crate::presentation::formatters::truncate;
use crate::presentation::view_models::SourceViewModel;

impl fmt::Display for SourceViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            SourceOrigin::Payload { location } => writeln!(f, "Origin:  {}", location)?,
            SourceOrigin::Fallback { reason } => {
                writeln!(f, "Origin:  built-in fallback")?;
                writeln!(f, "Reason:  {}", reason)?;
            }
        }
        writeln!(f, "Entries: {}", self.size)?;
        writeln!(
            f,
            "Loaded:  {}",
            self.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;

        if !self.sample.is_empty() {
            writeln!(f, "Sample:")?;
            for item in &self.sample {
                writeln!(f, "  - {}", truncate(item, 72))?;
            }
        }
        Ok(())
    }
}
