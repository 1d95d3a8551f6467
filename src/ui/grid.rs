use iced::widget::{column, container, scrollable, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::state::data::Product;
use crate::ui::card;
use crate::Message;

/// Render the derived product list as a scrollable wrap-grid,
/// or the empty-state panel when nothing matched.
///
/// The whole region is rebuilt from the input list on every call, so
/// rendering the same list twice shows the same cards.
pub fn view(products: &[Product]) -> Element<'_, Message> {
    if products.is_empty() {
        return empty_state();
    }

    let cards: Vec<Element<Message>> = products.iter().map(card::product_card).collect();

    scrollable(
        Wrap::with_elements(cards)
            .spacing(16.0)
            .line_spacing(16.0)
            .padding(4.0),
    )
    .height(Length::Fill)
    .into()
}

/// Centered "no results" panel shown instead of the grid
fn empty_state() -> Element<'static, Message> {
    let message = column![
        text("No products found").size(24),
        text("Try adjusting your search or filters.").size(14),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    container(message)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
