/// Converts Fahrenheit to Celsius, rounded to one decimal.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    round_to_tenths((fahrenheit - 32.0) * 5.0 / 9.0)
}

/// Converts Celsius to Fahrenheit, rounded to the nearest integer with halves rounded up.
pub fn celsius_to_fahrenheit(celsius: f64) -> i64 {
    let fahrenheit = celsius * 9.0 / 5.0 + 32.0;
    let floor = fahrenheit.floor();
    if fahrenheit - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// Rounds the exact decimal value of `value` to one decimal, halves away from zero.
fn round_to_tenths(value: f64) -> f64 {
    // Only odd multiples of 0.25 sit exactly between two tenths
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (value * 10.0).round() / 10.0;
    }

    // Formatting rounds the exact value, unlike scaling by ten
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// A trait to convert temperatures between Fahrenheit and Celsius.
///
/// Celsius values keep one decimal while Fahrenheit values are whole degrees, the precision the
/// appliances report in.
pub trait TemperatureConversions {
    /// Returns the value in Celsius by treating `self` as the value in Fahrenheit.
    fn fahrenheit_to_celsius(self) -> f64;

    /// Returns the value in Fahrenheit by treating `self` as the value in Celsius.
    fn celsius_to_fahrenheit(self) -> i64;
}

macro_rules! impl_temperature_conversions {
    ($($t:ty)*) => ($(
        impl TemperatureConversions for $t {
            fn fahrenheit_to_celsius(self) -> f64 {
                fahrenheit_to_celsius(self as f64)
            }
            fn celsius_to_fahrenheit(self) -> i64 {
                celsius_to_fahrenheit(self as f64)
            }
        }
    )*)
}

impl_temperature_conversions! { f32 f64 i32 i64 u32 }
