//! Rotary Encoder Demo Firmware
//!
//! Entry point for the STM32G474 demo board. Wires the encoder channels to
//! EXTI rising edges, polls the push button and logs every step over RTT.

#![no_std]
#![no_main]

use core::convert::Infallible;

use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::pac;
use embassy_stm32::pac::gpio::vals::Idr;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use rotary_counter::config::{pins, BUTTON_POLL_MS};
use rotary_counter::prelude::*;

type StepSignal = Signal<CriticalSectionRawMutex, Snapshot>;
type DemoEncoder = RotaryEncoder<PortAPins, EmbassyClock, &'static StepSignal>;

static STEPS: StepSignal = Signal::new();
static ENCODER: StaticCell<DemoEncoder> = StaticCell::new();

/// Encoder channels on PA0 (A) and PA1 (B), sampled in one port read
struct PortAPins;

impl QuadraturePins for PortAPins {
    type Error = Infallible;

    fn pattern(&mut self) -> Result<PinPattern, Self::Error> {
        let idr = pac::GPIOA.idr().read();
        Ok(PinPattern::from_levels(
            idr.idr(0) == Idr::HIGH,
            idr.idr(1) == Idr::HIGH,
        ))
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Rotary counter demo v{}", env!("CARGO_PKG_VERSION"));

    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    // Channel inputs; edges are delivered through EXTI0/EXTI1
    let a = ExtiInput::new(p.PA0, p.EXTI0, Pull::Up);
    let b = ExtiInput::new(p.PA1, p.EXTI1, Pull::Up);
    let button = PushButton::new(Input::new(p.PA2, Pull::Up));
    let led = Output::new(p.PA5, Level::Low, Speed::Low);

    info!(
        "Encoder A={} B={} SW={} LED={}",
        pins::ENCODER_A,
        pins::ENCODER_B,
        pins::ENCODER_SW,
        pins::LED_STATUS
    );

    let encoder_config = EncoderConfig::default().with_circular(true);
    info!("{}", encoder_config);

    let encoder: &'static DemoEncoder = ENCODER.init(
        RotaryEncoder::new(PortAPins, EmbassyClock, encoder_config).with_observer(&STEPS),
    );

    spawner.spawn(edge_task(a, b, encoder)).unwrap();
    spawner.spawn(counter_task(led, encoder)).unwrap();
    spawner.spawn(button_task(button, encoder)).unwrap();

    info!("Tasks spawned");
}

/// Forward rising edges on either channel to the encoder
#[embassy_executor::task]
async fn edge_task(
    mut a: ExtiInput<'static>,
    mut b: ExtiInput<'static>,
    encoder: &'static DemoEncoder,
) {
    loop {
        match select(a.wait_for_rising_edge(), b.wait_for_rising_edge()).await {
            Either::First(()) => encoder.on_channel_a(),
            Either::Second(()) => encoder.on_channel_b(),
        }
    }
}

/// Consume steps and blink the status LED on each one
#[embassy_executor::task]
async fn counter_task(mut led: Output<'static>, encoder: &'static DemoEncoder) {
    loop {
        let step = STEPS.wait().await;
        let state = encoder.read_state();
        info!("Step {} -> position {}", step, state.current);

        led.set_high();
        Timer::after(Duration::from_millis(20)).await;
        led.set_low();
    }
}

/// Reset the counter to its minimum when the button is pressed
#[embassy_executor::task]
async fn button_task(mut button: PushButton<Input<'static>>, encoder: &'static DemoEncoder) {
    loop {
        if let Ok(true) = button.update() {
            info!("Button {}", button.state());
            if button.is_pressed() {
                let position = encoder.set_position(encoder.range().min());
                info!("Counter reset to {}", position);
            }
        }
        Timer::after(Duration::from_millis(BUTTON_POLL_MS)).await;
    }
}
