use incall::application::InCallControls;
use incall::config::Config;
use incall::domain::call::{CallSessionSnapshot, InvState};
use incall::domain::controls::{ControlButton, ControlTriggered, HardKey, LockerChoice};
use incall::domain::media::MediaCapabilitySnapshot;
use incall::domain::shared::value_objects::CallId;
use incall::interface::{InputAdapter, InputEvent, InputResult, TracingRenderer};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    info!("Starting in-call controls");
    info!("Configuration loaded: {:?}", config);

    let controls = Arc::new(InCallControls::new(
        config.controls.clone(),
        Arc::new(TracingRenderer::new()),
    ));

    // Forward accepted actions to the call service task
    let (tx, rx) = mpsc::unbounded_channel::<ControlTriggered>();
    controls.set_trigger_listener(move |event| {
        if tx.send(event).is_err() {
            warn!("Call service is gone, control action lost");
        }
    });
    let call_service = tokio::spawn(run_call_service(rx));

    replay_incoming_call(&controls)?;

    // Dropping the listener closes the channel
    controls.clear_trigger_listener();
    let handled = call_service.await?;
    info!("Call service handled {} control actions", handled);

    Ok(())
}

/// Stand-in for the call service: consumes control actions
async fn run_call_service(mut rx: mpsc::UnboundedReceiver<ControlTriggered>) -> usize {
    let mut handled = 0;
    while let Some(event) = rx.recv().await {
        match serde_json::to_string(&event) {
            Ok(json) => info!("Call service received {}", json),
            Err(e) => warn!("Failed to encode control event: {}", e),
        }
        handled += 1;
    }
    handled
}

/// Replay a ringing call being answered, managed and hung up
fn replay_incoming_call(controls: &Arc<InCallControls>) -> anyhow::Result<()> {
    info!("=== Incoming Call Replay ===");
    let input = InputAdapter::new(controls.clone());
    let call_id = CallId::new(0);

    controls.set_call_state(Some(CallSessionSnapshot::from_raw(0, InvState::Incoming.code(), true)?));
    controls.set_call_state(Some(CallSessionSnapshot::incoming(call_id, InvState::Early)));

    // Buttons are hidden while ringing
    log_input(&input, InputEvent::Button(ControlButton::Mute));
    log_input(&input, InputEvent::Locker(LockerChoice::Left));

    controls.set_call_state(Some(CallSessionSnapshot::incoming(call_id, InvState::Connecting)));
    controls.set_call_state(Some(CallSessionSnapshot::incoming(call_id, InvState::Confirmed)));
    controls.set_media_state(MediaCapabilitySnapshot {
        can_bluetooth: false,
        ..MediaCapabilitySnapshot::all_capable()
    });

    // Stale slider gesture after the call was answered
    log_input(&input, InputEvent::Locker(LockerChoice::Left));
    log_input(&input, InputEvent::Button(ControlButton::Mute));
    log_input(&input, InputEvent::Button(ControlButton::Bluetooth));
    log_input(&input, InputEvent::Button(ControlButton::Dialpad));
    log_input(&input, InputEvent::Key(HardKey::End));

    controls.set_call_state(Some(CallSessionSnapshot::incoming(call_id, InvState::Disconnected)));
    log_input(&input, InputEvent::Key(HardKey::End));
    controls.set_call_state(None);

    info!("=== Incoming Call Replay Complete ===");
    Ok(())
}

fn log_input(input: &InputAdapter, event: InputEvent) {
    match input.handle(event) {
        InputResult::Dispatched(action) => info!("{:?} -> {}", event, action.as_str()),
        InputResult::Dropped { reset_locker } => {
            info!("{:?} dropped (reset locker: {})", event, reset_locker)
        }
        InputResult::Unhandled => info!("{:?} left to the platform", event),
    }
}
