use strum::{Display, EnumString};

/// The metric family an observation contributes to.
///
/// Category tags are matched exactly; `reach` or `Engagement` belong to neither family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricCategory {
    /// Exposure, e.g. a subject being shown something.
    Reach,

    /// Interaction, e.g. a subject acting on something they were shown.
    Engagement,
}
