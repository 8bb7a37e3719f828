//! End-to-end tests: mock sensor stream in, recorded key state out

use speed_keys::display::StatusDisplay;
use speed_keys::keyboard::{KeyEvent, RecordingKeyboard, VirtualKey};
use speed_keys::transport::MockTransport;
use speed_keys::{App, Config, Error, MotionAction};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

struct Harness {
    sensor: MockTransport,
    keyboard: RecordingKeyboard,
    running: Arc<AtomicBool>,
    app: App<MockTransport, RecordingKeyboard>,
}

fn harness(config: Config) -> Harness {
    let sensor = MockTransport::new();
    let keyboard = RecordingKeyboard::new();
    let running = Arc::new(AtomicBool::new(true));
    let app = App::from_config(
        &config,
        sensor.clone(),
        keyboard.clone(),
        StatusDisplay::silent(),
        Arc::clone(&running),
    );
    Harness {
        sensor,
        keyboard,
        running,
        app,
    }
}

fn keys(keyboard: &RecordingKeyboard) -> (bool, bool) {
    (
        keyboard.is_down(VirtualKey::Forward),
        keyboard.is_down(VirtualKey::Modifier),
    )
}

#[test]
fn test_walk_run_stop_from_stream() {
    let mut h = harness(Config::default());

    h.sensor.inject_line(r#"{"speed": 5}"#);
    assert_eq!(h.app.step().unwrap(), MotionAction::Walk);
    assert_eq!(keys(&h.keyboard), (true, false));

    h.sensor.inject_line(r#"{"speed": 30}"#);
    assert_eq!(h.app.step().unwrap(), MotionAction::Run);
    assert_eq!(keys(&h.keyboard), (true, true));

    h.sensor.inject_line(r#"{"speed": 0}"#);
    assert_eq!(h.app.step().unwrap(), MotionAction::Stop);
    assert_eq!(keys(&h.keyboard), (false, false));
}

#[test]
fn test_noise_between_samples() {
    let mut h = harness(Config::default());

    h.sensor.inject_read(b"\r\nBT connected\r\n{\"speed\": 25}\r\n");
    h.sensor.inject_line(r#"{"rpm": 80}"#);
    h.sensor.inject_line(r#"{"speed": 25.0001}"#);

    assert_eq!(h.app.step().unwrap(), MotionAction::Walk);
    assert_eq!(h.app.step().unwrap(), MotionAction::Run);
    assert_eq!(h.sensor.pending(), 0);
}

#[test]
fn test_interrupt_releases_keys_in_every_state() {
    for line in [r#"{"speed": 5}"#, r#"{"speed": 30}"#, r#"{"speed": 0}"#] {
        let mut h = harness(Config::default());
        h.sensor.inject_line(line);
        h.app.step().unwrap();

        h.running.store(false, Ordering::Relaxed);
        h.app.run().unwrap();
        assert!(h.keyboard.all_released(), "keys stuck after {}", line);
    }
}

#[test]
fn test_interrupt_while_blocked_on_sensor() {
    let mut h = harness(Config::default());
    h.sensor.inject_line(r#"{"speed": 40}"#);

    let flag = Arc::clone(&h.running);
    let stopper = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        flag.store(false, Ordering::Relaxed);
    });

    let samples = h.app.run().unwrap();
    stopper.join().unwrap();

    assert_eq!(samples, 1);
    assert!(h.keyboard.all_released());
    let events = h.keyboard.events();
    assert_eq!(
        &events[..2],
        &[
            KeyEvent::Press(VirtualKey::Forward),
            KeyEvent::Press(VirtualKey::Modifier)
        ]
    );
}

#[test]
fn test_disconnect_is_reported_and_keys_released() {
    let mut h = harness(Config::default());
    h.sensor.inject_line(r#"{"speed": 12}"#);
    h.sensor.close();

    assert!(matches!(h.app.run(), Err(Error::Disconnected)));
    assert!(h.keyboard.all_released());
}

#[test]
fn test_attempt_cap_from_config() {
    let mut config = Config::default();
    config.serial.max_attempts = Some(2);
    let mut h = harness(config);

    h.sensor.inject_line("garbage");
    h.sensor.inject_line("more garbage");

    assert!(matches!(
        h.app.step(),
        Err(Error::NoValidReading { attempts: 2 })
    ));
}

#[test]
fn test_custom_threshold_from_config() {
    let config = Config::from_toml("[motion]\nrun_threshold = 8.0\n").unwrap();
    let mut h = harness(config);

    h.sensor.inject_line(r#"{"speed": 9}"#);
    assert_eq!(h.app.step().unwrap(), MotionAction::Run);
}
