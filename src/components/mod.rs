//! UI Components

mod category_bar;
mod deck_view;
mod favorite_button;
mod filter_bar;
mod product_card;
mod search_panel;
mod similar_carousel;
mod swipe_controls;
mod swipe_overlay;

pub use category_bar::CategoryBar;
pub use deck_view::DeckView;
pub use favorite_button::FavoriteButton;
pub use filter_bar::FilterBar;
pub use product_card::ProductCard;
pub use search_panel::SearchPanel;
pub use similar_carousel::SimilarCarousel;
pub use swipe_controls::SwipeControls;
pub use swipe_overlay::SwipeOverlay;
