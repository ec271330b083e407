use std::sync::{Arc, Mutex};
use std::time::Duration;

use conway::{LifeConfig, Simulator};

const TICK: Duration = Duration::from_millis(100);

fn blinker_sim() -> Simulator {
    let config = LifeConfig::new(6, 6, false).with_generation_interval(TICK);
    let sim = Simulator::from_config(config).unwrap();
    sim.place("blinker", 2, 2).unwrap();
    sim
}

#[tokio::test(start_paused = true)]
async fn stop_before_the_first_tick_runs_nothing() {
    let mut sim = blinker_sim();
    let before = sim.snapshot();

    sim.start().unwrap();
    assert!(sim.is_running());
    sim.stop();
    assert!(!sim.is_running());

    tokio::time::sleep(TICK * 10).await;
    assert_eq!(sim.generation(), 0);
    assert_eq!(*sim.snapshot(), *before);
}

#[tokio::test(start_paused = true)]
async fn one_step_per_interval_until_stopped() {
    let mut sim = blinker_sim();
    let generations = Arc::new(Mutex::new(Vec::new()));
    {
        let generations = Arc::clone(&generations);
        sim.on_refresh(move |refresh| {
            generations.lock().unwrap().push(refresh.generation);
            Ok(())
        });
    }

    sim.start().unwrap();
    tokio::time::sleep(TICK * 3 + TICK / 2).await;
    assert_eq!(sim.generation(), 3);

    sim.stop();
    tokio::time::sleep(TICK * 5).await;
    assert_eq!(sim.generation(), 3);
    assert_eq!(*generations.lock().unwrap(), vec![1, 2, 3]);
}

#[tokio::test(start_paused = true)]
async fn starting_twice_keeps_a_single_timer() {
    let mut sim = blinker_sim();
    sim.start().unwrap();
    sim.start().unwrap();

    tokio::time::sleep(TICK * 2 + TICK / 2).await;
    assert_eq!(sim.generation(), 2);
    sim.stop();
    sim.stop();
    assert!(!sim.is_running());
}

#[tokio::test(start_paused = true)]
async fn manual_step_leaves_the_run_state_alone() {
    let mut sim = blinker_sim();
    sim.step();
    assert!(!sim.is_running());

    sim.start().unwrap();
    sim.step();
    assert!(sim.is_running());
    assert_eq!(sim.generation(), 2);
    sim.stop();
}

#[tokio::test(start_paused = true)]
async fn interval_change_restarts_the_timer() {
    let mut sim = blinker_sim();
    sim.start().unwrap();
    sim.set_generation_interval(TICK * 2).unwrap();
    assert!(sim.is_running());

    tokio::time::sleep(TICK * 3).await;
    assert_eq!(sim.generation(), 1);
    tokio::time::sleep(TICK * 2).await;
    assert_eq!(sim.generation(), 2);
    sim.stop();
}

#[tokio::test(start_paused = true)]
async fn timer_killed_by_a_panicking_subscriber_can_be_restarted() {
    let mut sim = blinker_sim();
    sim.on_refresh(|refresh| {
        if refresh.generation == 2 {
            panic!("renderer crashed on generation 2");
        }
        Ok(())
    });

    sim.start().unwrap();
    tokio::time::sleep(TICK * 10 + TICK / 2).await;
    assert_eq!(sim.generation(), 2);
    assert!(!sim.is_running());

    sim.start().unwrap();
    assert!(sim.is_running());
    tokio::time::sleep(TICK * 5 + TICK / 2).await;
    assert_eq!(sim.generation(), 7);
    sim.stop();
    assert!(!sim.is_running());
}

#[test]
fn start_on_an_explicit_runtime() {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .unwrap();
    let config = LifeConfig::new(6, 6, false).with_generation_interval(Duration::from_millis(5));
    let mut sim = Simulator::from_config(config).unwrap();
    sim.place("blinker", 2, 2).unwrap();

    sim.start_on(runtime.handle());
    assert!(sim.is_running());
    std::thread::sleep(Duration::from_millis(200));
    sim.stop();

    let generation = sim.generation();
    assert!(generation > 0);
    std::thread::sleep(Duration::from_millis(50));
    // A tick that had already woken may still finish its step
    assert!(sim.generation() <= generation + 1);
}
