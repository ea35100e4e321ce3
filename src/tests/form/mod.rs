mod component_number_tests;
mod component_select_tests;
mod component_text_tests;
mod dispatch_tests;
mod navigation_tests;
mod state_tests;
