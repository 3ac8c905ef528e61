pub mod enhancement_banner;
pub mod search_filter_strip;
pub mod search_input_top_bar;
pub mod search_result_card;
pub mod search_result_list_controls;
pub mod search_results_panel;
