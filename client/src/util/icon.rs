//! Icon identifiers shared by state and components.
//!
//! Icons render as empty `<span>`s whose glyph comes from the stylesheet, so
//! state modules can name an icon without depending on view code.

/// Every glyph the sidebar and calendar draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconName {
    Home,
    Building,
    Dollar,
    Users,
    Message,
    Bell,
    File,
    Settings,
    Help,
    Video,
    Phone,
    Calendar,
    Clock,
    MapPin,
    Plus,
    Close,
    Check,
    ChevronLeft,
    ChevronRight,
    Edit,
    Trash,
}

impl IconName {
    /// Modifier suffix for the `icon--*` CSS class.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Building => "building",
            Self::Dollar => "dollar",
            Self::Users => "users",
            Self::Message => "message",
            Self::Bell => "bell",
            Self::File => "file",
            Self::Settings => "settings",
            Self::Help => "help",
            Self::Video => "video",
            Self::Phone => "phone",
            Self::Calendar => "calendar",
            Self::Clock => "clock",
            Self::MapPin => "map-pin",
            Self::Plus => "plus",
            Self::Close => "close",
            Self::Check => "check",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::Edit => "edit",
            Self::Trash => "trash",
        }
    }

    pub fn css_class(self) -> String {
        format!("icon icon--{}", self.slug())
    }
}
