// Integration tests for archwalker

mod integration {
    mod cli_test;
    mod pipeline_test;
    mod scenarios_test;
}
