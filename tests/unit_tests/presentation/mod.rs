mod environment_test;
mod views_test;
