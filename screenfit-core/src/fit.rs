use getset::CopyGetters;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Fraction of the window used by the priority and custom-ratio sizings.
pub const PREFERENCE_SCALE: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, CopyGetters, Serialize, Deserialize)]
#[getset(get_copy = "pub")]
pub struct FitResult {
    width: u32,
    height: u32,
    ratio: f64,
}

impl FitResult {
    /// Floors both axes to whole pixels. Sizes that do not fit in a `u32`
    /// are rejected instead of saturating.
    fn from_raw(width: f64, height: f64) -> Result<Self> {
        let width = to_pixels("width", width)?;
        let height = to_pixels("height", height)?;
        let ratio = if height == 0 {
            0.0
        } else {
            width as f64 / height as f64
        };
        Ok(Self {
            width,
            height,
            ratio,
        })
    }
}

fn to_pixels(axis: &str, value: f64) -> Result<u32> {
    let value = value.max(0.0).floor();
    if !value.is_finite() || value > u32::MAX as f64 {
        return Err(Error::InvalidArgument(format!(
            "fitted {axis} {value} does not fit in a pixel size"
        )));
    }
    Ok(value as u32)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitParams {
    pub target_ratio: f64,
    pub margin: f64,
    pub min_width: f64,
    pub min_height: f64,
}

impl FitParams {
    pub fn fit(&self, container_width: f64, container_height: f64) -> Result<FitResult> {
        fit(
            container_width,
            container_height,
            self.target_ratio,
            self.margin,
            self.min_width,
            self.min_height,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preference {
    #[default]
    Balanced,
    WidthPriority,
    HeightPriority,
}

impl std::str::FromStr for Preference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "balanced" => Ok(Preference::Balanced),
            "width-priority" => Ok(Preference::WidthPriority),
            "height-priority" => Ok(Preference::HeightPriority),
            _ => Err(Error::InvalidArgument(format!("unknown preference {s:?}"))),
        }
    }
}

fn check_ratio(ratio: f64) -> Result<()> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "target ratio must be positive, got {ratio}"
        )));
    }
    Ok(())
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "{name} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

/// Largest `(width, height)` with the given ratio that fits in the container,
/// before any margin is applied.
fn largest_inside(container_width: f64, container_height: f64, ratio: f64) -> (f64, f64) {
    let width_based_height = container_width / ratio;
    let height_based_width = container_height * ratio;
    if width_based_height <= container_height {
        (container_width, width_based_height)
    } else {
        (height_based_width, container_height)
    }
}

/// Fits a `target_ratio` (width / height) box into the container.
///
/// The margin is subtracted flat from both axes, then each axis is raised to
/// its minimum. Once a minimum engages the returned ratio drifts away from
/// `target_ratio`.
pub fn fit(
    container_width: f64,
    container_height: f64,
    target_ratio: f64,
    margin: f64,
    min_width: f64,
    min_height: f64,
) -> Result<FitResult> {
    check_ratio(target_ratio)?;
    check_non_negative("container width", container_width)?;
    check_non_negative("container height", container_height)?;
    check_non_negative("margin", margin)?;
    check_non_negative("min width", min_width)?;
    check_non_negative("min height", min_height)?;

    let (width, height) = largest_inside(container_width, container_height, target_ratio);
    let width = min_width.max(width - margin);
    let height = min_height.max(height - margin);
    FitResult::from_raw(width, height)
}

/// Sizes the canvas along the axis the preference favours. The priority
/// modes use 90% of that axis and do not check the other one.
pub fn fit_with_preference(
    container_width: f64,
    container_height: f64,
    params: &FitParams,
    preference: Preference,
) -> Result<FitResult> {
    let ratio = params.target_ratio;
    match preference {
        Preference::Balanced => params.fit(container_width, container_height),
        Preference::WidthPriority => {
            check_ratio(ratio)?;
            check_non_negative("container width", container_width)?;
            let width = container_width * PREFERENCE_SCALE;
            FitResult::from_raw(width, width / ratio)
        }
        Preference::HeightPriority => {
            check_ratio(ratio)?;
            check_non_negative("container height", container_height)?;
            let height = container_height * PREFERENCE_SCALE;
            FitResult::from_raw(height * ratio, height)
        }
    }
}

/// Like [`fit`] but scales the fitted box by `scale` instead of applying a
/// margin and minimums.
pub fn fit_scaled(
    container_width: f64,
    container_height: f64,
    ratio: f64,
    scale: f64,
) -> Result<FitResult> {
    check_ratio(ratio)?;
    check_non_negative("container width", container_width)?;
    check_non_negative("container height", container_height)?;
    check_non_negative("scale", scale)?;

    let (width, height) = largest_inside(container_width, container_height, ratio);
    FitResult::from_raw(width * scale, height * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{assert, check, let_assert};

    const RATIO: f64 = 720.0 / 1280.0;

    fn default_fit(width: f64, height: f64) -> FitResult {
        let_assert!(Ok(result) = fit(width, height, RATIO, 20.0, 320.0, 568.0));
        result
    }

    #[test]
    fn tall_container_fits_to_width() {
        let result = default_fit(1000.0, 2000.0);
        check!(result.width() == 980);
        check!(result.height() == 1757);
    }

    #[test]
    fn wide_container_fits_to_height() {
        let result = default_fit(2000.0, 1000.0);
        check!(result.width() == 542);
        check!(result.height() == 980);
    }

    #[test]
    fn small_container_clamps_to_minimum() {
        let result = default_fit(100.0, 100.0);
        check!(result.width() == 320);
        check!(result.height() == 568);
        check!((result.ratio() - 320.0 / 568.0).abs() < 1e-12);
    }

    #[test]
    fn clamp_engages_on_one_axis_only() {
        // Height path gives (562.5, 1000) - margin, width falls under 600.
        let_assert!(Ok(result) = fit(2000.0, 1000.0, RATIO, 20.0, 600.0, 0.0));
        check!(result.width() == 600);
        check!(result.height() == 980);
        check!((result.ratio() - RATIO).abs() > 0.01);
    }

    #[test]
    fn exact_ratio_container_takes_width_path() {
        let_assert!(Ok(result) = fit(720.0, 1280.0, RATIO, 0.0, 0.0, 0.0));
        check!(result.width() == 720);
        check!(result.height() == 1280);
        check!(result.ratio() == RATIO);
    }

    #[test]
    fn fitted_candidate_stays_inside_container() {
        for width in (1..40).map(|i| i as f64 * 97.0) {
            for height in (1..40).map(|i| i as f64 * 89.0) {
                for ratio in [0.25, RATIO, 1.0, 16.0 / 9.0, 3.0] {
                    let_assert!(Ok(result) = fit(width, height, ratio, 0.0, 0.0, 0.0));
                    check!(result.width() as f64 <= width);
                    check!(result.height() as f64 <= height);
                    // One of the axes is flush with the container.
                    check!(
                        result.width() == width.floor() as u32
                            || result.height() == height.floor() as u32
                    );
                }
            }
        }
    }

    #[test]
    fn ratio_is_kept_when_unclamped() {
        let result = default_fit(1920.0, 1080.0);
        // Flooring both axes moves the ratio by well under a percent.
        check!((result.ratio() - RATIO).abs() < 0.01);
    }

    #[test]
    fn fit_is_idempotent() {
        check!(default_fit(1366.0, 768.0) == default_fit(1366.0, 768.0));
    }

    #[test]
    fn margin_larger_than_container_floors_at_zero() {
        let_assert!(Ok(result) = fit(10.0, 10.0, 1.0, 20.0, 0.0, 0.0));
        check!(result.width() == 0);
        check!(result.height() == 0);
        check!(result.ratio() == 0.0);
    }

    #[test]
    fn invalid_ratio_is_rejected() {
        check!(let Err(Error::InvalidArgument(_)) = fit(100.0, 100.0, 0.0, 0.0, 0.0, 0.0));
        check!(let Err(Error::InvalidArgument(_)) = fit(100.0, 100.0, -1.0, 0.0, 0.0, 0.0));
        check!(let Err(Error::InvalidArgument(_)) = fit(100.0, 100.0, f64::NAN, 0.0, 0.0, 0.0));
    }

    #[test]
    fn oversized_result_is_rejected() {
        check!(let Err(Error::InvalidArgument(_)) = fit(1e12, 1e13, RATIO, 20.0, 320.0, 568.0));
        check!(let Err(Error::InvalidArgument(_)) = fit(100.0, 100.0, RATIO, 0.0, 0.0, 1e10));
    }

    #[test]
    fn largest_pixel_size_is_accepted() {
        let max = u32::MAX as f64;
        let_assert!(Ok(result) = fit(max, max, 1.0, 0.0, 0.0, 0.0));
        check!(result.width() == u32::MAX);
        check!(result.height() == u32::MAX);
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        check!(let Err(Error::InvalidArgument(_)) = fit(-1.0, 100.0, RATIO, 0.0, 0.0, 0.0));
        check!(let Err(Error::InvalidArgument(_)) = fit(100.0, 100.0, RATIO, -5.0, 0.0, 0.0));
    }

    #[test]
    fn width_priority_uses_ninety_percent_of_width() {
        let params = FitParams {
            target_ratio: RATIO,
            margin: 20.0,
            min_width: 320.0,
            min_height: 568.0,
        };
        let_assert!(Ok(result) = fit_with_preference(1000.0, 500.0, &params, Preference::WidthPriority));
        check!(result.width() == 900);
        check!(result.height() == 1600);
    }

    #[test]
    fn height_priority_uses_ninety_percent_of_height() {
        let params = FitParams {
            target_ratio: RATIO,
            margin: 20.0,
            min_width: 320.0,
            min_height: 568.0,
        };
        let_assert!(Ok(result) = fit_with_preference(1000.0, 1280.0, &params, Preference::HeightPriority));
        check!(result.width() == 648);
        check!(result.height() == 1152);
    }

    #[test]
    fn balanced_preference_matches_fit() {
        let params = FitParams {
            target_ratio: RATIO,
            margin: 20.0,
            min_width: 320.0,
            min_height: 568.0,
        };
        let_assert!(Ok(result) = fit_with_preference(2000.0, 1000.0, &params, Preference::Balanced));
        assert!(result == default_fit(2000.0, 1000.0));
    }

    #[test]
    fn preference_parses_from_str() {
        check!("width-priority".parse::<Preference>().ok() == Some(Preference::WidthPriority));
        check!("height-priority".parse::<Preference>().ok() == Some(Preference::HeightPriority));
        check!("balanced".parse::<Preference>().ok() == Some(Preference::Balanced));
        check!(let Err(_) = "sideways".parse::<Preference>());
    }

    #[test]
    fn scaled_fit_for_wide_ratio() {
        // 16:9 in a 1000x1000 window: width path (1000, 562.5) then 90%.
        let_assert!(Ok(result) = fit_scaled(1000.0, 1000.0, 16.0 / 9.0, PREFERENCE_SCALE));
        check!(result.width() == 900);
        check!(result.height() == 506);
    }

    #[test]
    fn scaled_fit_for_tall_ratio() {
        // 3:4 in 1000x600: height path (450, 600) then 90%.
        let_assert!(Ok(result) = fit_scaled(1000.0, 600.0, 0.75, PREFERENCE_SCALE));
        check!(result.width() == 405);
        check!(result.height() == 540);
    }
}
