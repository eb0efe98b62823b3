//! Welding gas consumption estimate shown on the gases page.

/// Usable volume of one 40 l cylinder filled to 150 atm, in m³.
pub const CYLINDER_VOLUME_M3: f64 = 40.0 * 150.0 / 1000.0;

/// Calculator inputs. Negative values are treated as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsumptionInput {
    /// Welding current, A. Informational only, it does not enter the formula.
    pub current_a: f64,
    /// Shielding gas flow, l/min.
    pub flow_l_min: f64,
    pub hours_per_day: f64,
    pub days_per_month: f64,
}

impl Default for ConsumptionInput {
    fn default() -> Self {
        Self {
            current_a: 120.0,
            flow_l_min: 12.0,
            hours_per_day: 4.0,
            days_per_month: 22.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsumptionEstimate {
    pub liters_per_hour: f64,
    pub monthly_m3: f64,
    /// Number of 40 l / 150 atm cylinders per month, rounded up.
    pub cylinders: u32,
}

impl ConsumptionInput {
    pub fn estimate(&self) -> ConsumptionEstimate {
        let liters_per_hour = self.flow_l_min.max(0.0) * 60.0;
        let monthly_liters =
            liters_per_hour * self.hours_per_day.max(0.0) * self.days_per_month.max(0.0);
        let monthly_m3 = monthly_liters / 1000.0;
        let cylinders = if monthly_m3 > 0.0 {
            (monthly_m3 / CYLINDER_VOLUME_M3).ceil() as u32
        } else {
            0
        };

        ConsumptionEstimate {
            liters_per_hour,
            monthly_m3,
            cylinders,
        }
    }
}
