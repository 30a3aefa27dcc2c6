/// Adds two integers and returns the sum as a double.
pub fn add(a: i32, b: i32) -> f64 {
    f64::from(a) + f64::from(b)
}
