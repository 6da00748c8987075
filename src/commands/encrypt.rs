use crate::cli::Cli;
use crate::domain::models::{EncryptReport, JsonOut};
use crate::services::{audit, completer, config, report, resolver};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn handle_encrypt(cli: &Cli) -> anyhow::Result<()> {
    let config = config::load(&cli.config)?;

    let key_length = cli.activation_key.chars().count();
    let hints = match cli.seed {
        Some(seed) => completer::complete(
            key_length,
            config.hints,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => completer::complete(key_length, config.hints, &mut rand::rng()),
    };

    let (encrypted_key, records) =
        resolver::resolve(&cli.activation_key, &hints, &config.templates)?;
    let clue_sheet = report::write_clue_sheet(&cli.out_dir, &encrypted_key, &records)?;

    audit::audit(
        "encrypt",
        serde_json::json!({
            "key_length": key_length,
            "clue_sheet": clue_sheet.to_string_lossy(),
        }),
    );

    let report = EncryptReport {
        encrypted_key,
        clue_sheet: clue_sheet.to_string_lossy().into_owned(),
        hints: records,
    };
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: report
            })?
        );
    } else {
        println!("Hints have been written to {}", report.clue_sheet);
        println!("Encrypted Key: {}", report.encrypted_key);
    }

    Ok(())
}
