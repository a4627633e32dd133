mod java_file_tests;
