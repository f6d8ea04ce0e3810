use iced::widget::{Stack, column, container, opaque, row, scrollable};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::dashboard::DashboardWidget;
use crate::widgets::dashboard::view::DashboardProps;
use crate::widgets::dashboard::view::content as dashboard_content;
use crate::widgets::navigation::view::sidebar::{self, SidebarProps};
use crate::widgets::pos::view::overlay::{self, PosOverlayProps};
use crate::widgets::top_bar::view::top_bar::{self, TopBarProps};

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props: ThemeProps<'_> = ThemeProps::new(theme);
    let palette = *theme.iced_palette();
    let navigation_vm = app.widgets.navigation.vm();

    let sidebar = sidebar::view(SidebarProps {
        vm: navigation_vm,
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(AppEvent::Navigation);

    let top_bar = top_bar::view(TopBarProps {
        vm: app.widgets.top_bar.vm(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(AppEvent::TopBar);

    let dashboard = dashboard_content::view(DashboardProps {
        vm: DashboardWidget::vm(),
        theme: theme_props,
        fonts: &app.fonts,
    });

    let main_area = column![
        top_bar,
        scrollable(dashboard)
            .width(Length::Fill)
            .height(Length::Fill)
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    let shell = container(row![sidebar, main_area])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.background.into()),
            text_color: Some(palette.foreground),
            ..Default::default()
        });

    let pos_vm = app.widgets.pos.vm();
    // A closed overlay stays on screen until its exit transition ends.
    if !navigation_vm.pos_overlay_visible && !pos_vm.stage_animating {
        return shell.into();
    }

    let pos_overlay = overlay::view(PosOverlayProps {
        vm: pos_vm,
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(AppEvent::Pos);

    Stack::with_children(vec![shell.into(), opaque(pos_overlay)])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
