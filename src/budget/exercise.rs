//! Exercise calorie calculation
//!
//! Standard MET formula: kcal/min = MET × 3.5 × weight(kg) / 200.

/// Calories burned for an activity of the given MET intensity.
///
/// The caller must supply a known body weight; the service layer refuses to
/// log exercise for users without a stored profile rather than defaulting
/// the weight and silently under-reporting expenditure.
pub fn calories_burned(met: f64, weight_kg: f64, duration_minutes: f64) -> u32 {
    let per_minute = met * 3.5 * weight_kg / 200.0;
    (per_minute * duration_minutes).round() as u32
}
