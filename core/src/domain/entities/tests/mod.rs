mod member_tests;
