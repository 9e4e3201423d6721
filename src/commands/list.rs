use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tabwriter::TabWriter;

use crate::creds::{self, RegistryCredential};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List the records in the credential file")]
pub struct Options {
    #[clap(short = 'q', long = "quiet", help = "Only print the registry hosts")]
    pub quiet: bool,
}

pub async fn handle(options: &Options, state: State) -> Result<()> {
    let path = state.creds_path()?;
    let records = creds::load(&path).await?;

    if options.quiet {
        let hosts = records
            .iter()
            .map(|record| record.credentials.registry.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        println!("{hosts}");
    } else {
        println!("{}", format_records(&records).join("\n"));
    }

    Ok(())
}

// secrets never show up here, only the routing fields
pub fn format_records(records: &[RegistryCredential]) -> Vec<String> {
    let mut tw = TabWriter::new(vec![]);

    writeln!(&mut tw, "TYPE\tREGISTRY\tREGION\tREPOSITORY\tLOGIN").unwrap();

    for record in records {
        writeln!(
            &mut tw,
            "{}\t{}\t{}\t{}\t{}",
            record.registry_type,
            record.credentials.registry,
            record.credentials.region.as_deref().unwrap_or("-"),
            record.credentials.repository.as_deref().unwrap_or("-"),
            if record.platform_managed() { "no" } else { "yes" },
        )
        .unwrap();
    }

    String::from_utf8(tw.into_inner().unwrap())
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_records_hides_secrets() {
        let records = creds::parse(
            r#"[{
                "type": "ACR",
                "credentials": {
                    "registry": "acme.azurecr.io",
                    "registryUser": "acme",
                    "registryPassword": "hunter2"
                },
                "is_cdp": false
            }]"#,
        )
        .unwrap();

        let lines = format_records(&records);

        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("acme.azurecr.io"));
        assert!(lines[1].contains("yes"));
        assert!(!lines.join("\n").contains("hunter2"));
    }
}
