//! icd-autocomplete: console driver.
//!
//! Each stdin line is treated as the input's new text; matches are logged.
//! A line typed just before EOF is still looked up before exit.

use tokio::io::{AsyncBufReadExt, BufReader};

use icd_autocomplete::{AutocompleteConfig, IcdClient, MemoryForm, TracePresenter};

#[tokio::main]
async fn main() {
    icd_autocomplete::init_tracing();

    let config = AutocompleteConfig::from_env();
    tracing::info!(
        endpoint = %config.endpoint,
        min_length = config.min_length,
        debounce_ms = config.quiet_period.as_millis() as u64,
        "Starting ICD-11 autocomplete"
    );

    let client = IcdClient::new(&config).expect("Failed to build HTTP client");
    let (handle, task) =
        icd_autocomplete::spawn(config, client, TracePresenter, MemoryForm::default());

    let mut lines = BufReader::new(tokio::io::stdin()).split(b'\n');
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            line = lines.next_segment() => match line {
                Ok(Some(bytes)) => {
                    let Some(text) = decode_line(bytes) else {
                        continue;
                    };
                    if !handle.input(text) {
                        tracing::error!("Autocomplete loop stopped, exiting");
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read stdin");
                    break;
                }
            },
            _ = &mut ctrl_c => {
                tracing::info!("Received Ctrl+C, shutting down");
                break;
            }
        }
    }

    drop(handle);
    if let Err(e) = task.await {
        tracing::error!(error = %e, "Autocomplete loop panicked");
    }
}

/// Strip the line ending and decode, skipping lines that are not UTF-8
fn decode_line(mut bytes: Vec<u8>) -> Option<String> {
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    match String::from_utf8(bytes) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!(
                line = %String::from_utf8_lossy(e.as_bytes()),
                "Skipping input line that is not valid UTF-8"
            );
            None
        }
    }
}
