macro_rules! trace {
    ( @transform $($descr:tt)+ ) => {
        #[cfg(feature = "debug_trace")]
        println!("@transform: {}", format_args!($($descr)+));
    };

    ( @token $token:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@token: {:?}", $token);
    };
}
