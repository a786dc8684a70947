use crate::config::Format;
use crate::error::Result;
use crate::fields::{FieldCatalog, Kind};

pub fn list(kind: Kind, format: Format) -> Result<()> {
    let fields = FieldCatalog::get().select(kind);
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&fields)?),
        Format::Toml => {
            #[derive(serde::Serialize)]
            struct Table<'a> {
                kind: Kind,
                fields: &'a [&'static str],
            }
            print!("{}", toml::to_string(&Table { kind, fields: &fields })?)
        }
        Format::Text => {
            for f in fields {
                println!("{f}")
            }
        }
    }
    Ok(())
}
