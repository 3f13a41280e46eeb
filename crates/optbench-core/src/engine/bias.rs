use super::layout::SuiteVersion;

// Published per-function offsets. The 2021 and 2022 suites use explicit
// tables; 2014/2015/2017 assign 100 * function id, and every 2019 function
// has a target value of 1.0.
const CEC2021_BIAS: [f64; 10] = [
    100.0, 1100.0, 700.0, 1900.0, 1700.0, 1600.0, 2100.0, 2200.0, 2400.0, 2500.0,
];
const CEC2022_BIAS: [f64; 12] = [
    300.0, 400.0, 600.0, 800.0, 900.0, 1800.0, 2000.0, 2200.0, 2300.0, 2400.0, 2600.0, 2700.0,
];

/// Fixed offset added to the raw kernel output of a function, if one is
/// published for this version/function pair.
pub fn function_bias(version: SuiteVersion, function_id: u32) -> Option<f64> {
    let id = function_id as usize;
    match version {
        SuiteVersion::Cec2014 | SuiteVersion::Cec2017 => {
            (1..=30).contains(&id).then(|| 100.0 * id as f64)
        }
        SuiteVersion::Cec2015 => (1..=15).contains(&id).then(|| 100.0 * id as f64),
        SuiteVersion::Cec2019 => (1..=10).contains(&id).then_some(1.0),
        SuiteVersion::Cec2021 => CEC2021_BIAS.get(id.wrapping_sub(1)).copied(),
        SuiteVersion::Cec2022 => CEC2022_BIAS.get(id.wrapping_sub(1)).copied(),
    }
}
