// Sidebar navigation
pub(crate) const NAV_OVERVIEW: &[u8] =
    include_bytes!("../../../assets/svg/dashboard.svg");
pub(crate) const NAV_POS: &[u8] =
    include_bytes!("../../../assets/svg/store.svg");
pub(crate) const NAV_SUPPLY: &[u8] =
    include_bytes!("../../../assets/svg/truck.svg");
pub(crate) const NAV_TEAMS: &[u8] =
    include_bytes!("../../../assets/svg/team.svg");
pub(crate) const NAV_ANALYTICS: &[u8] =
    include_bytes!("../../../assets/svg/chart.svg");
pub(crate) const NAV_SCHEDULE: &[u8] =
    include_bytes!("../../../assets/svg/calendar.svg");
pub(crate) const NAV_ADMIN: &[u8] =
    include_bytes!("../../../assets/svg/settings.svg");

// Chrome
pub(crate) const LOGO: &[u8] = include_bytes!("../../../assets/svg/logo.svg");
pub(crate) const MENU_FOLD: &[u8] =
    include_bytes!("../../../assets/svg/menu-fold.svg");
pub(crate) const MENU_UNFOLD: &[u8] =
    include_bytes!("../../../assets/svg/menu-unfold.svg");
pub(crate) const SEARCH: &[u8] =
    include_bytes!("../../../assets/svg/search.svg");
pub(crate) const CLOSE: &[u8] = include_bytes!("../../../assets/svg/close.svg");

// Dashboard
pub(crate) const ARROW_UP: &[u8] =
    include_bytes!("../../../assets/svg/arrow-up.svg");
pub(crate) const ARROW_DOWN: &[u8] =
    include_bytes!("../../../assets/svg/arrow-down.svg");
pub(crate) const SPARKLE: &[u8] =
    include_bytes!("../../../assets/svg/sparkle.svg");
pub(crate) const FLASH: &[u8] = include_bytes!("../../../assets/svg/flash.svg");
pub(crate) const CHECK: &[u8] = include_bytes!("../../../assets/svg/check.svg");
