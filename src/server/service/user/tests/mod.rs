use crit_fumble_test_utils::prelude::*;
