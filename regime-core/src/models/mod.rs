mod city_type;
mod deduction_input;
mod regime;
mod salary_input;
mod slab_band;
mod tax_result;
mod tax_schedule;

pub use city_type::CityType;
pub use deduction_input::DeductionInput;
pub use regime::{Regime, RegimeChoice};
pub use salary_input::SalaryInput;
pub use slab_band::SlabBand;
pub use tax_result::TaxResult;
pub use tax_schedule::{ScheduleError, TaxSchedule};
