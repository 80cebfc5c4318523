mod proptest;
