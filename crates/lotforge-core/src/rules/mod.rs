pub mod ab2011;
pub mod aggregator;
pub mod base;
pub mod density_bonus;
pub mod sb35;
pub mod sb9;

pub use self::ab2011::{check_ab2011_eligibility, evaluate_ab2011, evaluate_ab2011_tracks};
pub use self::aggregator::select_best_scenario;
pub use self::base::resolve_base;
pub use self::density_bonus::apply_density_bonus;
pub use self::sb35::{check_sb35_eligibility, evaluate_sb35};
pub use self::sb9::{check_sb9_eligibility, evaluate_sb9};
