use super::{console, export, guidance};
use healthlynk_assist::{AssistConfig, GeminiClient, OfflineSource, ResponseSource};
use healthlynk_chat::{
    export_conversation, listen, Conversation, Notification, Notifier, SessionProfile,
    UnsupportedRecognizer,
};
use healthlynk_core::{CareGuide, Classifier, CurrentSymptom, Role};
use healthlynk_records::{write_json, Paths, Settings};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

const HELP: &str = "Commands: /voice, /guidance, /export [path], /quit";

struct ChatContext {
    paths: Paths,
    settings: Settings,
    profile: SessionProfile,
    notifier: Box<dyn Notifier>,
    guide: CareGuide,
}

fn response_source(config: AssistConfig, offline: bool) -> anyhow::Result<Arc<dyn ResponseSource>> {
    if offline || !config.has_api_key() {
        info!("using offline replies");
        return Ok(Arc::new(OfflineSource::default()));
    }
    Ok(Arc::new(GeminiClient::new(config)?))
}

/// Print assistant messages past `printed` and return the new count
fn print_replies(conversation: &Conversation, printed: usize) -> usize {
    let messages = conversation.messages();
    for message in messages.iter().skip(printed) {
        if message.role == Role::Assistant {
            println!("Assistant: {}", message.content);
        }
    }
    messages.len()
}

async fn converse(
    conversation: &Conversation,
    input: impl BufRead,
    ctx: &ChatContext,
) -> anyhow::Result<()> {
    let mut printed = print_replies(conversation, 0);
    let mut shown_symptom: Option<CurrentSymptom> = None;
    println!("{HELP}");

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        match trimmed {
            "/quit" | "/exit" => break,
            "/voice" => {
                if ctx.settings.voice_enabled {
                    listen(&UnsupportedRecognizer, conversation, ctx.notifier.as_ref()).await;
                } else {
                    ctx.notifier.notify(Notification::error(
                        "Voice input disabled",
                        "Turn voice on in settings to use it.",
                    ));
                }
            }
            "/guidance" => match conversation.current_symptom() {
                Some(symptom) => print!("{}", guidance::render(&ctx.guide, &symptom)),
                None => println!("No symptom detected yet."),
            },
            cmd if cmd.starts_with("/export") => {
                let path = match cmd.trim_start_matches("/export").trim() {
                    "" => export::default_output(&ctx.paths),
                    arg => PathBuf::from(arg),
                };
                if export_conversation(
                    &conversation.messages(),
                    &ctx.profile,
                    &path,
                    ctx.notifier.as_ref(),
                ) {
                    println!("Saved {}", path.display());
                }
            }
            cmd if cmd.starts_with('/') => println!("{HELP}"),
            _ => {
                if conversation.send(&line).is_some() {
                    conversation.wait_idle().await;
                }
            }
        }

        printed = print_replies(conversation, printed);
        let symptom = conversation.current_symptom();
        if symptom.is_some() && symptom != shown_symptom {
            if let Some(symptom) = &symptom {
                print!("\n{}\n", guidance::render(&ctx.guide, symptom));
            }
            shown_symptom = symptom;
        }
        std::io::stdout().flush()?;
    }
    Ok(())
}

pub fn run(patient: Option<String>, save: Option<PathBuf>, offline: bool) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let settings = Settings::load(&paths)?;
    let source = response_source(AssistConfig::from_env(), offline)?;

    let ctx = ChatContext {
        notifier: console::notifier(&settings),
        profile: export::profile_for(patient),
        guide: CareGuide::builtin(),
        paths,
        settings,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let messages = runtime.block_on(async {
        let conversation = Conversation::new(Arc::new(Classifier::default()), source);
        let result = converse(&conversation, std::io::stdin().lock(), &ctx).await;
        conversation.dispose();
        result.map(|()| conversation.messages())
    })?;

    if let Some(path) = save {
        write_json(&path, &messages)?;
        info!(path = %path.display(), messages = messages.len(), "transcript saved");
    }
    Ok(())
}
