/// Numeric conversion helpers.
///
/// The evaluator works on `f64` throughout, but the bitwise and logical
/// operators, the factorial and conditionals see their operands as integers.
/// These helpers centralize the truncating casts so the conversion rules live
/// in one place.
pub mod num;
