use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use gen3_core::core_api::{DecodeOutput, DecodedRecords, Engine, IntegrityWarning, RecordKind};
use gen3_render::{NameCatalog, render_export, render_json_full, render_trainer_text};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[arg(value_name = "SAVE.sav")]
    path: PathBuf,
    /// Decode only the trainer-info record.
    #[arg(long)]
    trainer: bool,
    /// Decode only the party roster.
    #[arg(long)]
    party: bool,
    /// Emit a JSON document instead of text.
    #[arg(long)]
    json: bool,
    /// Directory holding Species.txt, Moves.txt, and Items.txt for
    /// id-to-name resolution.
    #[arg(long, value_name = "DIR")]
    names: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let catalog = match &cli.names {
        Some(dir) => Some(NameCatalog::load_dir(dir)?),
        None => None,
    };

    let engine = Engine::new();

    // No selection flags means both record kinds.
    let (trainer, party, warnings) = if cli.trainer == cli.party {
        let session = engine.open_path(&cli.path)?;
        (
            Some(session.trainer().clone()),
            Some(session.party().to_vec()),
            session.warnings().to_vec(),
        )
    } else if cli.trainer {
        let DecodeOutput { records, warnings } =
            engine.decode_path(&cli.path, RecordKind::Trainer)?;
        match records {
            DecodedRecords::Trainer(trainer) => (Some(trainer), None, warnings),
            DecodedRecords::Party(_) => unreachable!("trainer decode returns a trainer record"),
        }
    } else {
        let DecodeOutput { records, warnings } = engine.decode_path(&cli.path, RecordKind::Party)?;
        match records {
            DecodedRecords::Party(party) => (None, Some(party), warnings),
            DecodedRecords::Trainer(_) => unreachable!("party decode returns party records"),
        }
    };

    report_warnings(&warnings);

    if cli.json {
        let doc = render_json_full(
            trainer.as_ref(),
            party.as_deref(),
            &warnings,
            catalog.as_ref(),
        );
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let mut blocks = Vec::new();
    if let Some(trainer) = &trainer {
        blocks.push(render_trainer_text(trainer));
    }
    if let Some(party) = &party {
        blocks.extend(
            party
                .iter()
                .map(|record| render_export(record, catalog.as_ref())),
        );
    }
    println!("{}", blocks.join("\n\n"));

    Ok(())
}

fn report_warnings(warnings: &[IntegrityWarning]) {
    for w in warnings {
        eprintln!(
            "warning: section {} has unexpected signature {:#010x}",
            w.section_id, w.signature
        );
    }
}
