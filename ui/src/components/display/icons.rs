/// Glyph icons used across the page
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Activity,
    BicepsFlexed,
    Calendar,
    ChevronLeft,
    ChevronRight,
    ClipboardList,
    Dumbbell,
    HeartPulse,
    MessageSquare,
    MoveHorizontal,
    Save,
    Scale,
    User,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Activity => "📈",
            Icon::BicepsFlexed => "💪",
            Icon::Calendar => "📅",
            Icon::ChevronLeft => "‹",
            Icon::ChevronRight => "›",
            Icon::ClipboardList => "📋",
            Icon::Dumbbell => "🏋️",
            Icon::HeartPulse => "💓",
            Icon::MessageSquare => "💬",
            Icon::MoveHorizontal => "↔️",
            Icon::Save => "💾",
            Icon::Scale => "⚖️",
            Icon::User => "👤",
        }
    }
}
