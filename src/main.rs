use ratecheck::error::AppResult;

fn main() -> AppResult<()> {
    ratecheck::entry::run()
}
