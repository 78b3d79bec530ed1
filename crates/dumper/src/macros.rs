//! `dump!` / `dd!` - call-site shorthands over a stdout [`Dumper`](crate::Dumper)
//!
//! Both evaluate to `Result<(), DumpError>`. `dd!` exits the process with
//! status 1 once the report has been written.
//!
//! A leading `=> responder` routes the report to that responder instead of
//! the console. A leading `config = &cfg;` builds the dumper from that
//! [`DumperConfig`](crate::DumperConfig) instead of the defaults, which is how
//! file logging is turned on at the call site:
//!
//! ```ignore
//! dumper::dump!(=> &mut res, user)?;
//! dumper::dd!(config = &cfg; user, order)?;
//! ```

/// Report the given values and keep running.
#[macro_export]
macro_rules! dump {
    (config = $config:expr; $($rest:tt)*) => {
        $crate::__report!(
            $crate::Dumper::new(::std::clone::Clone::clone($config)),
            dump,
            $($rest)*
        )
    };
    ($($rest:tt)*) => {
        $crate::__report!(<$crate::Dumper>::default(), dump, $($rest)*)
    };
}

/// Report the given values, then exit with status 1.
#[macro_export]
macro_rules! dd {
    (config = $config:expr; $($rest:tt)*) => {
        $crate::__report!(
            $crate::Dumper::new(::std::clone::Clone::clone($config)),
            dd,
            $($rest)*
        )
    };
    ($($rest:tt)*) => {
        $crate::__report!(<$crate::Dumper>::default(), dd, $($rest)*)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __report {
    ($dumper:expr, $op:ident, => $responder:expr $(, $value:expr)* $(,)?) => {
        $dumper
            .$op(::std::vec![
                $crate::DumpArg::Responder($responder),
                $($crate::DumpArg::Value(&$value)),*
            ])
            .map($crate::Outcome::enforce)
    };
    ($dumper:expr, $op:ident, $($value:expr),* $(,)?) => {
        $dumper
            .$op(::std::vec![$($crate::DumpArg::Value(&$value)),*])
            .map($crate::Outcome::enforce)
    };
}
