fn main() -> anyhow::Result<()> {
    render_frame::internal_main()
}
