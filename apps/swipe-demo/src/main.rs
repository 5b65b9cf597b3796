mod console_host;
mod samples;

use samples::{
    ripple_config, Backgrounds, RippleListener, SampleRow, ToastListener, ToggleListener, ROW_SIZE,
};
use swipeview_ui::SwipeConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Swipeview Demo ===");
    println!("Replays swipes against five sample rows:");
    println!("  - left only, right only and both directions");
    println!("  - a row whose right swipe toggles the left direction");
    println!("  - a row whose swipes switch its ripples on and off");
    println!();
    println!("Set RUST_LOG=debug or RUST_LOG=trace for gesture details");
    println!();

    let left_x = ROW_SIZE.width - 40.0;
    let right_x = 40.0;

    let mut swipe_left = SampleRow::new(
        "swipe_left",
        Backgrounds::Left,
        SwipeConfig::default(),
        Box::new(ToastListener { name: "swipe_left" }),
    );
    swipe_left.swipe(left_x, 20.0, 12);
    swipe_left.settle();
    swipe_left.swipe(right_x, ROW_SIZE.width - 20.0, 12);
    swipe_left.settle();

    let mut swipe_right = SampleRow::new(
        "swipe_right",
        Backgrounds::Right,
        SwipeConfig::default(),
        Box::new(ToastListener {
            name: "swipe_right",
        }),
    );
    swipe_right.swipe(right_x, ROW_SIZE.width - 20.0, 12);
    swipe_right.settle();

    let mut swipe_both = SampleRow::new(
        "swipe_both",
        Backgrounds::Both,
        SwipeConfig::default(),
        Box::new(ToastListener { name: "swipe_both" }),
    );
    swipe_both
        .view_mut()
        .set_on_click_listener(Some(Box::new(|| log::info!("[swipe_both] clicked"))));
    swipe_both.tap(ROW_SIZE.width / 2.0);
    swipe_both.settle();
    // A quick flick that stays short of the activation distance.
    swipe_both.swipe(left_x, left_x - 90.0, 3);
    swipe_both.settle();

    let mut swipe_toggle = SampleRow::new(
        "toggle",
        Backgrounds::Both,
        SwipeConfig::default(),
        Box::new(ToggleListener),
    );
    for _ in 0..2 {
        swipe_toggle.swipe(right_x, ROW_SIZE.width - 20.0, 12);
        swipe_toggle.settle();
        swipe_toggle.swipe(left_x, 20.0, 12);
        swipe_toggle.settle();
    }

    let mut swipe_ripples = SampleRow::new(
        "ripples",
        Backgrounds::Both,
        ripple_config(),
        Box::new(RippleListener),
    );
    swipe_ripples.swipe(left_x, 20.0, 12);
    swipe_ripples.settle();
    swipe_ripples.swipe(right_x, ROW_SIZE.width - 20.0, 12);
    swipe_ripples.settle();
}
