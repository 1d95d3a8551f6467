use iced::widget::{column, container, image, text};
use iced::{Color, Element, Length};

use crate::format::{format_price, star_rating};
use crate::state::data::{Product, StockStatus};
use crate::Message;

/// Fixed card width so the wrap-grid lines up in tidy columns
const CARD_WIDTH: u16 = 230;
/// Height reserved for the product image
const IMAGE_HEIGHT: u16 = 140;

const CATEGORY_COLOR: Color = Color { r: 0.55, g: 0.55, b: 0.60, a: 1.0 };
const STAR_COLOR: Color = Color { r: 0.95, g: 0.77, b: 0.06, a: 1.0 };

const IN_STOCK_COLOR: Color = Color { r: 0.35, g: 0.75, b: 0.45, a: 1.0 };
const LOW_STOCK_COLOR: Color = Color { r: 0.90, g: 0.65, b: 0.20, a: 1.0 };
const OUT_OF_STOCK_COLOR: Color = Color { r: 0.85, g: 0.35, b: 0.35, a: 1.0 };
const UNKNOWN_STOCK_COLOR: Color = Color { r: 0.55, g: 0.55, b: 0.60, a: 1.0 };

/// Build one product card: image, name, category, price, rating, stock
pub fn product_card(product: &Product) -> Element<'_, Message> {
    let (stock_label, stock_color) = stock_badge(&product.stock);

    let content = column![
        image(image::Handle::from_path(product.image.as_str()))
            .width(Length::Fill)
            .height(IMAGE_HEIGHT),
        text(&product.name).size(16),
        text(&product.category).size(13).color(CATEGORY_COLOR),
        text(format_price(product.price)).size(15),
        text(star_rating(product.rating)).size(14).color(STAR_COLOR),
        text(stock_label).size(13).color(stock_color),
    ]
    .spacing(6);

    container(content)
        .width(CARD_WIDTH)
        .padding(12)
        .style(container::rounded_box)
        .into()
}

/// Map a stock status to its badge label and color.
/// Unexpected values fall through to a neutral badge.
fn stock_badge(stock: &StockStatus) -> (&str, Color) {
    let color = match stock {
        StockStatus::InStock => IN_STOCK_COLOR,
        StockStatus::LowStock => LOW_STOCK_COLOR,
        StockStatus::OutOfStock => OUT_OF_STOCK_COLOR,
        StockStatus::Unknown(_) => UNKNOWN_STOCK_COLOR,
    };
    (stock.label(), color)
}
