pub mod category_bar;
pub mod notice;
pub mod quiz_panel;
pub mod subcategory_list;
pub mod symbol_palette;
