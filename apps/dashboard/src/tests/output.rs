use crate::commands::output::bar_length;

#[test]
fn given_values_when_scaling_bars_then_largest_fills_width() {
    assert_eq!(bar_length(10, 10), 40);
    assert_eq!(bar_length(5, 10), 20);
}

#[test]
fn given_tiny_or_zero_values_when_scaling_bars_then_nonzero_gets_one() {
    assert_eq!(bar_length(1, 1_000), 1);
    assert_eq!(bar_length(0, 10), 0);
    assert_eq!(bar_length(0, 0), 0);
}
