pub(crate) mod dashboard;
pub(crate) mod navigation;
pub(crate) mod pos;
pub(crate) mod top_bar;

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) navigation: navigation::NavigationWidget,
    pub(crate) top_bar: top_bar::TopBarWidget,
    pub(crate) pos: pos::PosWidget,
}

impl Widgets {
    pub(crate) fn new() -> Self {
        Self {
            navigation: navigation::NavigationWidget::new(),
            top_bar: top_bar::TopBarWidget::new(),
            pos: pos::PosWidget::new(),
        }
    }
}
