mod resolved_type_tests;
