mod config;
mod logging;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use config::AppConfig;
use meme_room_adapters::{
    present_captions, present_gallery_row, present_tile, present_upload, CloudinaryUrlRenderer,
    LocalUploadService, SqliteKeyValueStore, SystemClock,
};
use meme_room_application::{
    BootstrapStoreCommand, GalleryTilesQuery, MemeSession, PreviewQuery, RegisterUploadCommand,
    ResetSessionCommand, RestoreSessionCommand, SelectBackgroundCommand, SelectOutcome,
    SetCaptionCommand, UploadBackgroundCommand,
};
use meme_room_domain::{BackgroundId, CaptionSlot, UploadResult};

#[derive(Parser, Debug)]
#[command(name = "meme-room", version, about = "Compose memes on a remote image service")]
struct Cli {
    /// TOML configuration file. Defaults to ~/.config/meme-room/config.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
enum Command {
    /// Print captions, the selected background and the preview URL.
    Show,
    /// List backgrounds with their thumbnail URLs; `*` marks the active one.
    Gallery,
    /// Make a background the active one.
    Select { id: String },
    /// Upload a local image and make it the active background.
    Upload { file: PathBuf },
    /// Register an asset that was uploaded to the image service elsewhere.
    Register {
        #[arg(long)]
        public_id: String,
        #[arg(long, default_value = "")]
        filename: String,
    },
    /// Set the top caption.
    Top { text: String },
    /// Set the bottom caption.
    Bottom { text: String },
    /// Print the preview URL, or the full transform request with --json.
    Preview {
        #[arg(long)]
        json: bool,
    },
    /// Forget every stored background and caption.
    Reset,
}

fn main() -> ExitCode {
    logging::init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    tracing::debug!(
        store = %config.store_path.display(),
        cloud = %config.cloud_name,
        "configuration loaded"
    );
    let mut session = build_session(&config);
    session
        .bootstrap_store(BootstrapStoreCommand)
        .context("failed to open meme-room store")?;

    let command = cli.cmd.unwrap_or(Command::Show);
    if command != Command::Reset {
        session
            .restore(RestoreSessionCommand)
            .context("failed to restore saved session (`meme-room reset` starts over)")?;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_command(command, &mut session, &mut out)
}

fn build_session(config: &AppConfig) -> MemeSession {
    MemeSession::new(
        Box::new(SqliteKeyValueStore::new(config.store_path.clone())),
        Box::new(LocalUploadService::new(
            config.asset_dir.clone(),
            config.upload_folder.clone(),
            Box::new(SystemClock),
        )),
        Box::new(
            CloudinaryUrlRenderer::new(config.cloud_name.clone())
                .with_base_url(config.delivery_base_url.clone()),
        ),
    )
}

fn run_command(
    command: Command,
    session: &mut MemeSession,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Show => {
            writeln!(out, "{}", present_captions(session.captions()))?;
            match session.gallery().selected() {
                Some(id) => writeln!(out, "background: {id}")?,
                None => writeln!(out, "background: none")?,
            }
            if let Some(url) = session.preview_url(PreviewQuery)? {
                writeln!(out, "preview: {url}")?;
            }
        }
        Command::Gallery => {
            let tiles = session.gallery_tiles(GalleryTilesQuery)?;
            if tiles.is_empty() {
                writeln!(out, "no backgrounds in gallery")?;
            }
            for (index, tile) in tiles.iter().enumerate() {
                writeln!(out, "{}", present_tile(index, tile))?;
            }
        }
        Command::Select { id } => {
            let outcome = session
                .select_background(SelectBackgroundCommand {
                    id: BackgroundId::new(id.clone()),
                })
                .context("select failed")?;
            match outcome {
                SelectOutcome::Selected => writeln!(out, "selected {id}")?,
                SelectOutcome::Dangling => {
                    writeln!(out, "selected {id} (not in gallery, preview will not resolve)")?
                }
            }
        }
        Command::Upload { file } => {
            let entry = session
                .upload_background(UploadBackgroundCommand { source: file })
                .context("upload failed")?;
            writeln!(out, "{}", present_upload(&entry))?;
        }
        Command::Register {
            public_id,
            filename,
        } => {
            let entry = session
                .register_upload(RegisterUploadCommand {
                    result: UploadResult {
                        public_id: BackgroundId::new(public_id),
                        original_filename: filename,
                    },
                })
                .context("register failed")?;
            writeln!(out, "{}", present_upload(&entry))?;
        }
        Command::Top { text } => {
            session.set_caption(SetCaptionCommand {
                slot: CaptionSlot::Top,
                text,
            })?;
        }
        Command::Bottom { text } => {
            session.set_caption(SetCaptionCommand {
                slot: CaptionSlot::Bottom,
                text,
            })?;
        }
        Command::Preview { json } => {
            let Some(request) = session.preview_request(PreviewQuery) else {
                writeln!(out, "no background selected")?;
                return Ok(());
            };
            let url = session.preview_url(PreviewQuery)?.unwrap_or_default();
            if json {
                let document = serde_json::json!({ "request": request, "url": url });
                writeln!(out, "{}", serde_json::to_string_pretty(&document)?)?;
            } else {
                writeln!(out, "{url}")?;
            }
        }
        Command::Reset => {
            session.reset(ResetSessionCommand)?;
            writeln!(out, "session reset")?;
            for (index, entry) in session.gallery().entries().iter().enumerate() {
                writeln!(out, "{}", present_gallery_row(index, entry))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use meme_room_adapters::InMemoryKeyValueStore;
    use meme_room_domain::default_catalog;

    fn memory_session() -> MemeSession {
        let mut session = MemeSession::new(
            Box::new(InMemoryKeyValueStore::default()),
            Box::new(LocalUploadService::new(
                std::env::temp_dir().join("meme-room-test-assets"),
                "uploads",
                Box::new(SystemClock),
            )),
            Box::new(CloudinaryUrlRenderer::new("demo")),
        );
        session
            .restore(RestoreSessionCommand)
            .expect("restore should work");
        session
    }

    fn run_to_string(command: Command, session: &mut MemeSession) -> String {
        let mut out = Vec::new();
        run_command(command, session, &mut out).expect("command should succeed");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn parse_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["meme-room"]).expect("parse");
        assert!(cli.cmd.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_register_with_flags() {
        let cli = Cli::try_parse_from([
            "meme-room",
            "register",
            "--public-id",
            "uploads/abc123",
            "--filename",
            "cat.png",
        ])
        .expect("parse");
        assert_eq!(
            cli.cmd,
            Some(Command::Register {
                public_id: "uploads/abc123".to_string(),
                filename: "cat.png".to_string(),
            })
        );
    }

    #[test]
    fn parse_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["meme-room", "frobnicate"]).is_err());
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["meme-room", "show", "--config", "alt.toml"]).expect("parse");
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn register_then_show_reports_new_background() {
        let mut session = memory_session();

        let registered = run_to_string(
            Command::Register {
                public_id: "uploads/abc123".to_string(),
                filename: "cat.png".to_string(),
            },
            &mut session,
        );
        assert_eq!(registered, "registered background uploads/abc123 (cat.png)\n");

        let shown = run_to_string(Command::Show, &mut session);
        assert!(shown.starts_with("top: This is a cool\nbottom: meme generator\n"));
        assert!(shown.contains("background: uploads/abc123\n"));
        assert!(shown.contains("preview: https://res.cloudinary.com/demo/image/upload/"));
    }

    #[test]
    fn select_unknown_id_is_reported_not_rejected() {
        let mut session = memory_session();

        let output = run_to_string(
            Command::Select {
                id: "nope".to_string(),
            },
            &mut session,
        );

        assert_eq!(output, "selected nope (not in gallery, preview will not resolve)\n");
    }

    #[test]
    fn gallery_lists_catalog_with_active_marker() {
        let mut session = memory_session();
        let catalog = default_catalog();

        let output = run_to_string(Command::Gallery, &mut session);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(&format!("* 0\t{}", catalog[0].id)));
        assert!(lines[1].starts_with(&format!("  1\t{}", catalog[1].id)));
        assert!(lines[0].contains("c_fill,g_auto,h_150,w_150"));
    }

    #[test]
    fn caption_commands_flow_into_preview_json() {
        let mut session = memory_session();
        run_to_string(
            Command::Top {
                text: "one does not simply".to_string(),
            },
            &mut session,
        );
        run_to_string(
            Command::Bottom {
                text: "write a meme in rust".to_string(),
            },
            &mut session,
        );

        let output = run_to_string(Command::Preview { json: true }, &mut session);
        let document: serde_json::Value = serde_json::from_str(&output).expect("json");

        assert_eq!(
            document["request"]["overlays"][0]["text"],
            "one does not simply"
        );
        assert_eq!(
            document["request"]["overlays"][1]["text"],
            "write a meme in rust"
        );
        assert_eq!(document["request"]["width"], 640);
        assert!(document["url"]
            .as_str()
            .expect("url string")
            .contains("one%20does%20not%20simply"));
    }

    #[test]
    fn reset_lists_default_catalog() {
        let mut session = memory_session();
        run_to_string(
            Command::Select {
                id: default_catalog()[2].id.to_string(),
            },
            &mut session,
        );

        let output = run_to_string(Command::Reset, &mut session);

        assert!(output.starts_with("session reset\n* 0\t"));
        assert_eq!(session.gallery().selected(), Some(&default_catalog()[0].id));
    }
}
