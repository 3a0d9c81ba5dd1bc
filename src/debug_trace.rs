use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "debug_trace")] {
        use std::fmt::Debug;

        pub fn print_chars(action_descr: &str, ch: Option<char>) {
            match ch {
                Some(ch) => println!(">{action_descr}: {ch:?}"),
                None => println!(">{action_descr}"),
            }
        }

        pub fn print_state(state: &impl Debug) {
            println!("@state: {state:?}");
        }

        pub fn print_stack(action_descr: &str, name: &str, depth: usize) {
            println!("@stack: {action_descr} `{name}` (depth: {depth})");
        }
    }
}

macro_rules! trace {
    ( @chars $action_descr:expr ) => {
        #[cfg(feature = "debug_trace")]
        $crate::debug_trace::print_chars($action_descr, None);
    };

    ( @chars $action_descr:expr, $ch:expr ) => {
        #[cfg(feature = "debug_trace")]
        $crate::debug_trace::print_chars($action_descr, Some($ch));
    };

    ( @state $state:expr ) => {
        #[cfg(feature = "debug_trace")]
        $crate::debug_trace::print_state(&$state);
    };

    ( @stack $action_descr:expr, $name:expr, $depth:expr ) => {
        #[cfg(feature = "debug_trace")]
        $crate::debug_trace::print_stack($action_descr, $name, $depth);
    };
}
